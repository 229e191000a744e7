//! Host settings surface.
//!
//! Legend options arrive through the host's object/property blob and are
//! re-exposed through an `enumerate_object_instances`-style surface so the
//! host can build its settings UI.

use ganttviz_core::{LegendPosition, LegendSettings};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Parse the `legend` settings object from the host objects blob.
///
/// Absent or malformed properties fall back to the defaults; the whole blob
/// may be `Null`.
pub fn parse_legend_settings(objects: &Value) -> LegendSettings {
    let defaults = LegendSettings::default();
    let legend = &objects["legend"];

    LegendSettings {
        show: legend["show"].as_bool().unwrap_or(defaults.show),
        position: legend["position"]
            .as_str()
            .and_then(LegendPosition::from_name)
            .unwrap_or(defaults.position),
        show_title: legend["showTitle"].as_bool().unwrap_or(defaults.show_title),
        title_text: legend["titleText"]
            .as_str()
            .map(str::to_string)
            .unwrap_or(defaults.title_text),
        label_color: legend["labelColor"]
            .as_str()
            .map(str::to_string)
            .unwrap_or(defaults.label_color),
        font_size: legend["fontSize"]
            .as_u64()
            .map(|v| v as u32)
            .unwrap_or(defaults.font_size),
    }
}

/// One configurable object instance exposed to the host settings UI
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInstance {
    pub object_name: String,
    pub display_name: String,
    pub properties: Map<String, Value>,
}

/// Enumerate instances for a named settings object. Only `legend` exists;
/// any other name yields an empty enumeration.
pub fn enumerate_object_instances(
    object_name: &str,
    legend: &LegendSettings,
) -> Vec<ObjectInstance> {
    match object_name {
        "legend" => {
            let properties = json!({
                "show": legend.show,
                "position": legend.position,
                "showTitle": legend.show_title,
                "titleText": legend.title_text,
                "labelColor": legend.label_color,
                "fontSize": legend.font_size,
            });

            vec![ObjectInstance {
                object_name: "legend".into(),
                display_name: "Legend".into(),
                properties: properties.as_object().cloned().unwrap_or_default(),
            }]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_blob_yields_defaults() {
        let settings = parse_legend_settings(&Value::Null);
        assert_eq!(settings, LegendSettings::default());
    }

    #[test]
    fn parses_all_six_properties() {
        let objects = json!({
            "legend": {
                "show": false,
                "position": "RightCenter",
                "showTitle": false,
                "titleText": "Pipelines",
                "labelColor": "#333333",
                "fontSize": 12,
            }
        });
        let settings = parse_legend_settings(&objects);
        assert!(!settings.show);
        assert_eq!(settings.position, LegendPosition::RightCenter);
        assert!(!settings.show_title);
        assert_eq!(settings.title_text, "Pipelines");
        assert_eq!(settings.label_color, "#333333");
        assert_eq!(settings.font_size, 12);
    }

    #[test]
    fn malformed_properties_fall_back_individually() {
        let objects = json!({
            "legend": {
                "show": "yes",
                "position": "Diagonal",
                "fontSize": 12,
            }
        });
        let settings = parse_legend_settings(&objects);
        let defaults = LegendSettings::default();
        assert_eq!(settings.show, defaults.show);
        assert_eq!(settings.position, defaults.position);
        assert_eq!(settings.font_size, 12);
    }

    #[test]
    fn legend_enumeration_exposes_six_properties() {
        let instances = enumerate_object_instances("legend", &LegendSettings::default());
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].object_name, "legend");
        assert_eq!(instances[0].properties.len(), 6);
        assert_eq!(instances[0].properties["position"], json!("Top"));
    }

    #[test]
    fn unknown_object_enumerates_empty() {
        let instances = enumerate_object_instances("colorSelector", &LegendSettings::default());
        assert!(instances.is_empty());
    }
}
