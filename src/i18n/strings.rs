//! Centralized localized strings for the consent surfaces.
//!
//! Each supported locale gets one `const` dictionary of type `LocaleStrings`.
//! The dictionaries are plain typed structs, so a missing key in any locale
//! is a compile error rather than a runtime lookup failure. The path-based
//! resolver (see `resolver`) operates on a JSON projection of these structs
//! for callers that only know a dotted key at runtime.

use serde::Serialize;

use crate::i18n::Locale;

/// All localized user-facing strings for one locale.
///
/// Strings are stored raw; placeholders use the `{name}` convention and are
/// substituted by `resolver::interpolate`.
#[derive(Debug, Clone, Serialize)]
pub struct LocaleStrings {
    /// Cookie-consent surfaces (banner, settings panel, category copy)
    pub cookies: CookieStrings,

    /// Footer fragments that belong to the consent subsystem
    pub footer: FooterStrings,
}

/// Strings for the cookie-consent subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct CookieStrings {
    /// First-visit banner
    pub banner: BannerStrings,

    /// Reopenable settings panel
    pub manager: ManagerStrings,

    /// Per-category copy, keyed by category id
    pub types: CategoryStrings,
}

/// First-visit banner strings.
#[derive(Debug, Clone, Serialize)]
pub struct BannerStrings {
    pub title: &'static str,
    pub message: &'static str,
    pub accept_all: &'static str,
    pub reject_all: &'static str,
    pub customize: &'static str,
    pub save_preferences: &'static str,
    pub back: &'static str,
}

/// Settings-panel strings.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerStrings {
    pub title: &'static str,
    pub intro: &'static str,
    pub save: &'static str,
    pub reset: &'static str,
    pub close: &'static str,

    /// Label shown on the pinned necessary-cookies toggle
    pub always_on: &'static str,

    /// Shown under the title for a returning visitor
    /// Placeholders: {date}
    pub last_saved: &'static str,
}

/// Copy for one consent category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCopy {
    pub title: &'static str,
    pub description: &'static str,

    /// Cookie names shown as examples; rendered as a list, so this leaf is
    /// an array rather than a scalar
    pub examples: &'static [&'static str],
}

/// Per-category copy for all three categories.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStrings {
    pub necessary: CategoryCopy,
    pub analytics: CategoryCopy,
    pub marketing: CategoryCopy,
}

/// Footer strings owned by the consent subsystem.
#[derive(Debug, Clone, Serialize)]
pub struct FooterStrings {
    /// Label of the link that reopens the settings panel
    pub cookie_settings: &'static str,
}

// Example cookie names are identifiers, not copy; they are shared verbatim
// across all locales.
const NECESSARY_EXAMPLES: &[&str] = &["session", "cookieConsent"];
const ANALYTICS_EXAMPLES: &[&str] = &["_ga", "_gid"];
const MARKETING_EXAMPLES: &[&str] = &["_fbp", "ads_id"];

// ==================== English Strings ====================

/// English strings (default/fallback locale)
pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    cookies: CookieStrings {
        banner: BannerStrings {
            title: "Your privacy",
            message: "We use cookies to improve our services and analyze site traffic. \
                      Necessary cookies are always active.",
            accept_all: "Accept all",
            reject_all: "Reject all",
            customize: "Customize",
            save_preferences: "Save preferences",
            back: "Back",
        },
        manager: ManagerStrings {
            title: "Cookie settings",
            intro: "Manage your cookie preferences. Changes take effect once saved.",
            save: "Save",
            reset: "Reset to defaults",
            close: "Close",
            always_on: "Always on",
            last_saved: "Preferences last saved {date}",
        },
        types: CategoryStrings {
            necessary: CategoryCopy {
                title: "Necessary cookies",
                description: "Required for the site to function and cannot be switched off.",
                examples: NECESSARY_EXAMPLES,
            },
            analytics: CategoryCopy {
                title: "Analytics cookies",
                description: "Help us understand how visitors use the site.",
                examples: ANALYTICS_EXAMPLES,
            },
            marketing: CategoryCopy {
                title: "Marketing cookies",
                description: "Used to show you relevant advertising.",
                examples: MARKETING_EXAMPLES,
            },
        },
    },
    footer: FooterStrings {
        cookie_settings: "Cookie settings",
    },
};

// ==================== Czech Strings ====================

/// Czech strings
pub const CZECH_STRINGS: LocaleStrings = LocaleStrings {
    cookies: CookieStrings {
        banner: BannerStrings {
            title: "Vaše soukromí",
            message: "Používáme soubory cookie ke zlepšování našich služeb a k analýze \
                      návštěvnosti. Nezbytné cookies jsou vždy aktivní.",
            accept_all: "Přijmout vše",
            reject_all: "Odmítnout vše",
            customize: "Přizpůsobit",
            save_preferences: "Uložit předvolby",
            back: "Zpět",
        },
        manager: ManagerStrings {
            title: "Nastavení cookies",
            intro: "Spravujte své předvolby souborů cookie. Změny se projeví po uložení.",
            save: "Uložit",
            reset: "Obnovit výchozí",
            close: "Zavřít",
            always_on: "Vždy aktivní",
            last_saved: "Předvolby naposledy uloženy {date}",
        },
        types: CategoryStrings {
            necessary: CategoryCopy {
                title: "Nezbytné cookies",
                description: "Jsou nutné pro základní fungování webu a nelze je vypnout.",
                examples: NECESSARY_EXAMPLES,
            },
            analytics: CategoryCopy {
                title: "Analytické cookies",
                description: "Pomáhají nám pochopit, jak návštěvníci web používají.",
                examples: ANALYTICS_EXAMPLES,
            },
            marketing: CategoryCopy {
                title: "Marketingové cookies",
                description: "Používají se k zobrazování relevantní reklamy.",
                examples: MARKETING_EXAMPLES,
            },
        },
    },
    footer: FooterStrings {
        cookie_settings: "Nastavení cookies",
    },
};

// ==================== German Strings ====================

/// German strings
pub const GERMAN_STRINGS: LocaleStrings = LocaleStrings {
    cookies: CookieStrings {
        banner: BannerStrings {
            title: "Ihre Privatsphäre",
            message: "Wir verwenden Cookies, um unsere Dienste zu verbessern und den \
                      Datenverkehr zu analysieren. Notwendige Cookies sind immer aktiv.",
            accept_all: "Alle akzeptieren",
            reject_all: "Alle ablehnen",
            customize: "Anpassen",
            save_preferences: "Einstellungen speichern",
            back: "Zurück",
        },
        manager: ManagerStrings {
            title: "Cookie-Einstellungen",
            intro: "Verwalten Sie Ihre Cookie-Einstellungen. Änderungen werden nach dem \
                    Speichern wirksam.",
            save: "Speichern",
            reset: "Zurücksetzen",
            close: "Schließen",
            always_on: "Immer aktiv",
            last_saved: "Einstellungen zuletzt gespeichert {date}",
        },
        types: CategoryStrings {
            necessary: CategoryCopy {
                title: "Notwendige Cookies",
                description: "Für die Grundfunktionen der Website erforderlich und nicht \
                              deaktivierbar.",
                examples: NECESSARY_EXAMPLES,
            },
            analytics: CategoryCopy {
                title: "Analyse-Cookies",
                description: "Helfen uns zu verstehen, wie Besucher die Website nutzen.",
                examples: ANALYTICS_EXAMPLES,
            },
            marketing: CategoryCopy {
                title: "Marketing-Cookies",
                description: "Werden verwendet, um Ihnen relevante Werbung anzuzeigen.",
                examples: MARKETING_EXAMPLES,
            },
        },
    },
    footer: FooterStrings {
        cookie_settings: "Cookie-Einstellungen",
    },
};

// ==================== Ukrainian Strings ====================

/// Ukrainian strings
pub const UKRAINIAN_STRINGS: LocaleStrings = LocaleStrings {
    cookies: CookieStrings {
        banner: BannerStrings {
            title: "Ваша конфіденційність",
            message: "Ми використовуємо файли cookie, щоб покращувати наші послуги та \
                      аналізувати відвідуваність. Необхідні cookie завжди активні.",
            accept_all: "Прийняти всі",
            reject_all: "Відхилити всі",
            customize: "Налаштувати",
            save_preferences: "Зберегти налаштування",
            back: "Назад",
        },
        manager: ManagerStrings {
            title: "Налаштування cookie",
            intro: "Керуйте своїми налаштуваннями файлів cookie. Зміни набудуть чинності \
                    після збереження.",
            save: "Зберегти",
            reset: "Скинути",
            close: "Закрити",
            always_on: "Завжди активні",
            last_saved: "Налаштування востаннє збережено {date}",
        },
        types: CategoryStrings {
            necessary: CategoryCopy {
                title: "Необхідні cookie",
                description: "Потрібні для базової роботи сайту, їх не можна вимкнути.",
                examples: NECESSARY_EXAMPLES,
            },
            analytics: CategoryCopy {
                title: "Аналітичні cookie",
                description: "Допомагають нам зрозуміти, як відвідувачі користуються сайтом.",
                examples: ANALYTICS_EXAMPLES,
            },
            marketing: CategoryCopy {
                title: "Маркетингові cookie",
                description: "Використовуються для показу релевантної реклами.",
                examples: MARKETING_EXAMPLES,
            },
        },
    },
    footer: FooterStrings {
        cookie_settings: "Налаштування cookie",
    },
};

/// Get the typed dictionary for a locale.
pub fn strings_for(locale: Locale) -> &'static LocaleStrings {
    match locale.code() {
        "cs" => &CZECH_STRINGS,
        "de" => &GERMAN_STRINGS,
        "uk" => &UKRAINIAN_STRINGS,
        _ => &ENGLISH_STRINGS,
    }
}
