use serde::{Deserialize, Serialize};

/// Renderer toggles and layout geometry. The defaults reproduce the
/// classic diagram: 1 px per base, 150 px between records, a 100 px
/// margin on each side and a 200 px legend band at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub show_exons: bool,
    pub show_motifs: bool,
    pub show_legend: bool,
    pub record_spacing: f32,
    pub side_margin: f32,
    pub legend_band: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_exons: true,
            show_motifs: true,
            show_legend: true,
            record_spacing: 150.0,
            side_margin: 100.0,
            legend_band: 200.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_serde_round_trip() {
        let settings = RenderSettings {
            show_legend: false,
            ..RenderSettings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: RenderSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, back);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RenderSettings = serde_json::from_str(r#"{"show_motifs":false}"#).unwrap();
        assert!(!settings.show_motifs);
        assert!(settings.show_exons);
        assert_eq!(settings.record_spacing, 150.0);
    }
}
