use crate::error::MotifMarkError;
use serde::{Deserialize, Serialize};

/// Fixed diagram palette: purple, blue, green, pink, yellow.
pub const DEFAULT_PALETTE: [&str; 5] = ["#6a4c93", "#1982c4", "#8ac926", "#ff595e", "#ffca3a"];

/// Maps each distinct motif to a palette color, in the order motifs first
/// appear in the input list. Built once per run and passed explicitly to
/// whoever needs it; there is no ambient registry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorAssignment {
    entries: Vec<(String, String)>,
}

impl ColorAssignment {
    pub fn with_default_palette(motif_texts: &[String]) -> Result<Self, MotifMarkError> {
        Self::new(motif_texts, &DEFAULT_PALETTE)
    }

    pub fn new(motif_texts: &[String], palette: &[&str]) -> Result<Self, MotifMarkError> {
        let mut distinct: Vec<&String> = vec![];
        for text in motif_texts {
            if !distinct.contains(&text) {
                distinct.push(text);
            }
        }
        if distinct.len() > palette.len() {
            return Err(MotifMarkError::PaletteExhausted {
                motifs: distinct.len(),
                colors: palette.len(),
            });
        }
        let entries = distinct
            .into_iter()
            .zip(palette.iter())
            .map(|(motif, color)| (motif.clone(), color.to_string()))
            .collect();
        Ok(Self { entries })
    }

    pub fn color_of(&self, motif: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == motif)
            .map(|(_, color)| color.as_str())
    }

    /// Legend order: motifs in first-appearance order with their colors.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(motif, color)| (motif.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assignment_follows_list_order() {
        let assignment =
            ColorAssignment::with_default_palette(&texts(&["ycgy", "GCAUG", "catag"])).unwrap();
        let legend: Vec<(&str, &str)> = assignment.iter().collect();
        assert_eq!(
            legend,
            vec![
                ("ycgy", "#6a4c93"),
                ("GCAUG", "#1982c4"),
                ("catag", "#8ac926"),
            ]
        );
        assert_eq!(assignment.color_of("GCAUG"), Some("#1982c4"));
        assert_eq!(assignment.color_of("missing"), None);
    }

    #[test]
    fn test_duplicate_motifs_assigned_once() {
        let assignment =
            ColorAssignment::with_default_palette(&texts(&["AA", "CC", "AA"])).unwrap();
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.color_of("CC"), Some("#1982c4"));
    }

    #[test]
    fn test_palette_exhaustion_is_an_error() {
        let result =
            ColorAssignment::with_default_palette(&texts(&["A", "C", "G", "T", "N", "Y"]));
        match result {
            Err(MotifMarkError::PaletteExhausted { motifs, colors }) => {
                assert_eq!(motifs, 6);
                assert_eq!(colors, 5);
            }
            other => panic!("expected PaletteExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_motif_list_is_fine() {
        let assignment = ColorAssignment::with_default_palette(&[]).unwrap();
        assert!(assignment.is_empty());
    }
}
