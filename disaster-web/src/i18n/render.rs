use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to Korean, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{name}` placeholders replaced from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lookup_walks_dotted_keys() {
        let value = serde_json::json!({"bag": {"weight": "Weight"}});
        assert_eq!(
            get_nested_value(&value, "bag.weight"),
            Some(&Value::String("Weight".into()))
        );
        assert_eq!(get_nested_value(&value, "bag.volume"), None);
    }

    #[test]
    fn interpolation_replaces_placeholders() {
        let value = Value::String("Room : {code}".into());
        let mut args = BTreeMap::new();
        args.insert("code", "AB12CD");
        assert_eq!(
            render_value(&value, Some(&args)).as_deref(),
            Some("Room : AB12CD")
        );
    }

    #[test]
    fn missing_keys_render_as_the_key() {
        crate::i18n::set_lang("ko");
        assert_eq!(t("no.such.key"), "no.such.key");
        assert_eq!(t("app.title"), "Disaster.io");
    }
}
