mod platform_locale;
pub use self::platform_locale::PlatformLocale;
pub mod traits;
pub use self::traits::LocaleProvider;
