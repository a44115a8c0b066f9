use crate::i18n::locales::{DEFAULT_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "disaster.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language
///
/// Unknown codes are ignored. On the web the choice is mirrored onto
/// `<html lang>` and persisted to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("Unsupported locale {lang}");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("en").expect("bundle should load");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn unsupported_locale_is_ignored() {
        assert!(build_bundle("xx").is_none());
        set_lang("ko");
        set_lang("xx");
        assert_eq!(current_lang(), "ko");
    }
}
