//! The fixed registry of 32 alert tones.
//!
//! The table is immutable static data; [`Catalog`] is a zero-sized handle
//! over it. Engines consume tones through the [`ToneCatalog`] trait so tests
//! can substitute their own entries.

use serde::Serialize;

use crate::dip::DipSwitches;
use crate::error::CatalogResult;
use crate::pattern::{BurstTiming, PatternKind, SweepMotion, TonePattern};

/// Lowest valid tone id.
pub const MIN_TONE_ID: u8 = 1;
/// Highest valid tone id.
pub const MAX_TONE_ID: u8 = 32;

/// One catalog entry: descriptive metadata plus synthesis structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TonePatternSpec {
    /// Tone id, 1-32.
    pub id: u8,
    /// Frequency summary as printed in the sounder manual.
    pub frequency: &'static str,
    /// Full description including timings.
    pub description: &'static str,
    /// DIP switch configuration selecting this tone.
    pub dip_switches: &'static str,
    /// Standard the tone conforms to, if any.
    pub standard: Option<&'static str>,
    /// Synthesis structure. `None` renders a plain tone at the frequency
    /// parsed from `frequency`.
    pub pattern: Option<TonePattern>,
}

impl TonePatternSpec {
    /// The pattern family, if the entry has a structural pattern.
    pub fn kind(&self) -> Option<PatternKind> {
        self.pattern.as_ref().map(TonePattern::kind)
    }
}

/// Source of tone definitions for synthesis.
pub trait ToneCatalog {
    /// Looks up a tone by id.
    fn resolve(&self, tone_id: u8) -> Option<&TonePatternSpec>;
}

impl<T: ToneCatalog + ?Sized> ToneCatalog for &T {
    fn resolve(&self, tone_id: u8) -> Option<&TonePatternSpec> {
        (**self).resolve(tone_id)
    }
}

impl ToneCatalog for [TonePatternSpec] {
    fn resolve(&self, tone_id: u8) -> Option<&TonePatternSpec> {
        self.iter().find(|tone| tone.id == tone_id)
    }
}

impl ToneCatalog for Vec<TonePatternSpec> {
    fn resolve(&self, tone_id: u8) -> Option<&TonePatternSpec> {
        self.as_slice().resolve(tone_id)
    }
}

/// Handle over the built-in tone table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Creates a handle over the built-in table.
    pub fn new() -> Self {
        Self
    }

    /// Looks up a tone by id.
    pub fn get(&self, tone_id: u8) -> Option<&'static TonePatternSpec> {
        if (MIN_TONE_ID..=MAX_TONE_ID).contains(&tone_id) {
            Some(&TONES[(tone_id - MIN_TONE_ID) as usize])
        } else {
            None
        }
    }

    /// All tones in id order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TonePatternSpec> {
        TONES.iter()
    }

    /// Number of tones in the table.
    pub fn len(&self) -> usize {
        TONES.len()
    }

    /// Always false; the table is fixed.
    pub fn is_empty(&self) -> bool {
        TONES.is_empty()
    }

    /// Tones whose standard contains `standard`, ignoring case.
    pub fn search_by_standard(&self, standard: &str) -> Vec<&'static TonePatternSpec> {
        let needle = standard.to_uppercase();
        self.iter()
            .filter(|tone| {
                tone.standard
                    .is_some_and(|s| s.to_uppercase().contains(&needle))
            })
            .collect()
    }

    /// Tones whose frequency text contains `frequency`.
    pub fn search_by_frequency(&self, frequency: u32) -> Vec<&'static TonePatternSpec> {
        let needle = frequency.to_string();
        self.iter()
            .filter(|tone| tone.frequency.contains(&needle))
            .collect()
    }

    /// Tones in the given pattern family.
    pub fn search_by_pattern(&self, kind: PatternKind) -> Vec<&'static TonePatternSpec> {
        self.iter().filter(|tone| tone.kind() == Some(kind)).collect()
    }

    /// Tones whose description contains `term`, ignoring case.
    pub fn search_by_description(&self, term: &str) -> Vec<&'static TonePatternSpec> {
        let needle = term.to_lowercase();
        self.iter()
            .filter(|tone| tone.description.to_lowercase().contains(&needle))
            .collect()
    }

    /// The DIP switch configuration for a tone.
    pub fn dip_switches(&self, tone_id: u8) -> Option<&'static str> {
        self.get(tone_id).map(|tone| tone.dip_switches)
    }

    /// Finds the tone selected by a DIP switch string such as `O-I-O-I-O`.
    pub fn find_by_dip_switches(
        &self,
        config: &str,
    ) -> CatalogResult<Option<&'static TonePatternSpec>> {
        let dip: DipSwitches = config.parse()?;
        Ok(self.get(dip.tone_id()))
    }

    /// Sorted, deduplicated list of standards referenced by the table.
    pub fn standards(&self) -> Vec<&'static str> {
        let mut standards: Vec<_> = self.iter().filter_map(|tone| tone.standard).collect();
        standards.sort_unstable();
        standards.dedup();
        standards
    }

    /// Tones described as evacuation signals.
    pub fn evacuation_tones(&self) -> Vec<&'static TonePatternSpec> {
        self.search_by_description("evacuation")
    }

    /// Tones described as alert signals.
    pub fn alert_tones(&self) -> Vec<&'static TonePatternSpec> {
        self.search_by_description("alert")
    }
}

impl ToneCatalog for Catalog {
    fn resolve(&self, tone_id: u8) -> Option<&TonePatternSpec> {
        self.get(tone_id)
    }
}

const fn continuous(frequency: f64) -> Option<TonePattern> {
    Some(TonePattern::Continuous { frequency })
}

const fn pulsed(frequency: f64, on: f64, off: f64) -> Option<TonePattern> {
    Some(TonePattern::Pulsed { frequency, on, off })
}

const fn alternating(first: f64, second: f64, first_hold: f64, second_hold: f64) -> Option<TonePattern> {
    Some(TonePattern::Alternating {
        first,
        second,
        first_hold,
        second_hold,
    })
}

const fn repeating(start: f64, end: f64, rate: f64) -> Option<TonePattern> {
    Some(TonePattern::Swept {
        start,
        end,
        motion: SweepMotion::Repeating { rate },
    })
}

const fn triangle(low: f64, high: f64, rate: f64) -> Option<TonePattern> {
    Some(TonePattern::Swept {
        start: low,
        end: high,
        motion: SweepMotion::Triangle { rate },
    })
}

const fn gated(start: f64, end: f64, sweep: f64, gap: f64) -> Option<TonePattern> {
    Some(TonePattern::Swept {
        start,
        end,
        motion: SweepMotion::Gated { sweep, gap },
    })
}

const fn pulsed_burst(frequency: f64) -> Option<TonePattern> {
    Some(TonePattern::PulsedBurst {
        frequency,
        burst: BurstTiming::STANDARD,
    })
}

const fn swept_burst(start: f64, end: f64) -> Option<TonePattern> {
    Some(TonePattern::SweptBurst {
        start,
        end,
        burst: BurstTiming::STANDARD,
    })
}

/// The built-in tone table, indexed by `id - 1`.
pub static TONES: [TonePatternSpec; 32] = [
    TonePatternSpec {
        id: 1,
        frequency: "970Hz",
        description: "970Hz",
        dip_switches: "O-O-O-O-O",
        standard: None,
        pattern: continuous(970.0),
    },
    TonePatternSpec {
        id: 2,
        frequency: "800Hz/970Hz @ 2Hz",
        description: "800Hz/970Hz @ 2Hz",
        dip_switches: "O-O-O-O-I",
        standard: None,
        pattern: alternating(800.0, 970.0, 0.25, 0.25),
    },
    TonePatternSpec {
        id: 3,
        frequency: "800Hz – 970Hz @ 1Hz",
        description: "800Hz – 970Hz @ 1Hz",
        dip_switches: "O-O-O-I-O",
        standard: None,
        pattern: repeating(800.0, 970.0, 1.0),
    },
    TonePatternSpec {
        id: 4,
        frequency: "970Hz",
        description: "970Hz 1s OFF/1s ON",
        dip_switches: "O-O-O-I-I",
        standard: None,
        pattern: pulsed(970.0, 1.0, 1.0),
    },
    TonePatternSpec {
        id: 5,
        frequency: "970Hz/630Hz",
        description: "970Hz, 0.5s/ 630Hz, 0.5s",
        dip_switches: "O-O-I-O-O",
        standard: None,
        pattern: alternating(970.0, 630.0, 0.5, 0.5),
    },
    TonePatternSpec {
        id: 6,
        frequency: "554Hz/440Hz",
        description: "554Hz, 0.1s/ 440Hz, 0.4s",
        dip_switches: "O-O-I-O-I",
        standard: Some("AFNOR NF S 32 001"),
        pattern: alternating(554.0, 440.0, 0.1, 0.4),
    },
    TonePatternSpec {
        id: 7,
        frequency: "500 – 1200Hz",
        description: "500 – 1200Hz, 3.5s/ 0.5s OFF (NEN 2575:2000 Dutch Slow Whoop)",
        dip_switches: "O-O-I-I-O",
        standard: Some("NEN 2575:2000"),
        pattern: gated(500.0, 1200.0, 3.5, 0.5),
    },
    TonePatternSpec {
        id: 8,
        frequency: "420Hz",
        description: "420Hz 0.6s ON/0.6s OFF (Australia AS1670 Alert tone)",
        dip_switches: "O-O-I-I-I",
        standard: Some("AS1670"),
        pattern: pulsed(420.0, 0.6, 0.6),
    },
    TonePatternSpec {
        id: 9,
        frequency: "1000 - 2500Hz",
        description: "1000 - 2500Hz, 0.5s/ 0.5s OFF x 3/1.5s OFF ( AS1670 Evacuation)",
        dip_switches: "O-I-O-O-O",
        standard: Some("AS1670"),
        pattern: swept_burst(1000.0, 2500.0),
    },
    TonePatternSpec {
        id: 10,
        frequency: "550Hz/440Hz @ 0.5Hz",
        description: "550Hz/440Hz @ 0.5Hz",
        dip_switches: "O-I-O-O-I",
        standard: None,
        pattern: alternating(550.0, 440.0, 1.0, 1.0),
    },
    TonePatternSpec {
        id: 11,
        frequency: "970Hz",
        description: "970Hz, 0.5s ON/0.5s OFF x 3/ 1.5s OFF",
        dip_switches: "O-I-O-I-O",
        standard: Some("ISO 8201"),
        pattern: pulsed_burst(970.0),
    },
    TonePatternSpec {
        id: 12,
        frequency: "2850Hz",
        description: "2850Hz, 0.5s ON/0.5s OFF x 3/1.5s OFF",
        dip_switches: "O-I-O-I-I",
        standard: Some("ISO 8201"),
        pattern: pulsed_burst(2850.0),
    },
    TonePatternSpec {
        id: 13,
        frequency: "1200Hz – 500Hz @ 1Hz",
        description: "1200Hz – 500Hz @ 1Hz",
        dip_switches: "O-I-I-O-O",
        standard: Some("DIN 33 404"),
        pattern: repeating(1200.0, 500.0, 1.0),
    },
    TonePatternSpec {
        id: 14,
        frequency: "400Hz",
        description: "400Hz",
        dip_switches: "O-I-I-O-I",
        standard: None,
        pattern: continuous(400.0),
    },
    TonePatternSpec {
        id: 15,
        frequency: "550Hz/1000Hz",
        description: "550Hz, 0.7s/1000Hz, 0.33s",
        dip_switches: "O-I-I-I-O",
        standard: None,
        pattern: alternating(550.0, 1000.0, 0.7, 0.33),
    },
    TonePatternSpec {
        id: 16,
        frequency: "1500Hz – 2700Hz @ 3Hz",
        description: "1500Hz – 2700Hz @ 3Hz",
        dip_switches: "O-I-I-I-I",
        standard: None,
        pattern: repeating(1500.0, 2700.0, 3.0),
    },
    TonePatternSpec {
        id: 17,
        frequency: "750Hz",
        description: "750Hz",
        dip_switches: "I-O-O-O-O",
        standard: None,
        pattern: continuous(750.0),
    },
    TonePatternSpec {
        id: 18,
        frequency: "2400Hz",
        description: "2400Hz",
        dip_switches: "I-O-O-O-I",
        standard: None,
        pattern: continuous(2400.0),
    },
    TonePatternSpec {
        id: 19,
        frequency: "660Hz",
        description: "660Hz",
        dip_switches: "I-O-O-I-O",
        standard: None,
        pattern: continuous(660.0),
    },
    TonePatternSpec {
        id: 20,
        frequency: "660Hz",
        description: "660Hz 1.8s ON/1.8s OFF",
        dip_switches: "I-O-O-I-I",
        standard: None,
        pattern: pulsed(660.0, 1.8, 1.8),
    },
    TonePatternSpec {
        id: 21,
        frequency: "660Hz",
        description: "660Hz 0.15s ON/0.15s OFF",
        dip_switches: "I-O-I-O-O",
        standard: None,
        pattern: pulsed(660.0, 0.15, 0.15),
    },
    TonePatternSpec {
        id: 22,
        frequency: "510Hz/610Hz",
        description: "510Hz, 0.25s/ 610Hz, 0.25s",
        dip_switches: "I-O-I-O-I",
        standard: None,
        pattern: alternating(510.0, 610.0, 0.25, 0.25),
    },
    TonePatternSpec {
        id: 23,
        frequency: "800/1000Hz",
        description: "800/1000Hz 0.5s each (1Hz)",
        dip_switches: "I-O-I-I-O",
        standard: None,
        pattern: alternating(800.0, 1000.0, 0.5, 0.5),
    },
    TonePatternSpec {
        id: 24,
        frequency: "250Hz – 1200Hz @ 12Hz",
        description: "250Hz – 1200Hz @ 12Hz",
        dip_switches: "I-O-I-I-I",
        standard: None,
        pattern: repeating(250.0, 1200.0, 12.0),
    },
    TonePatternSpec {
        id: 25,
        frequency: "500Hz – 1200Hz @ 0.33Hz",
        description: "500Hz – 1200Hz @ 0.33Hz",
        dip_switches: "I-I-O-O-O",
        standard: None,
        pattern: triangle(500.0, 1200.0, 0.33),
    },
    TonePatternSpec {
        id: 26,
        frequency: "2400Hz – 2900Hz @ 9Hz",
        description: "2400Hz – 2900Hz @ 9Hz",
        dip_switches: "I-I-O-O-I",
        standard: None,
        pattern: repeating(2400.0, 2900.0, 9.0),
    },
    TonePatternSpec {
        id: 27,
        frequency: "2400Hz – 2900Hz @ 3Hz",
        description: "2400Hz – 2900Hz @ 3Hz",
        dip_switches: "I-I-O-I-O",
        standard: None,
        pattern: repeating(2400.0, 2900.0, 3.0),
    },
    TonePatternSpec {
        id: 28,
        frequency: "500 - 1200Hz",
        description: "500 - 1200Hz, 0.5s/ 0.5s OFF x 3/1.5s OFF ( AS1670 Evacuation)",
        dip_switches: "I-I-O-I-I",
        standard: Some("AS1670"),
        pattern: swept_burst(500.0, 1200.0),
    },
    TonePatternSpec {
        id: 29,
        frequency: "800Hz – 970Hz @ 9Hz",
        description: "800Hz – 970Hz @ 9Hz",
        dip_switches: "I-I-I-O-O",
        standard: None,
        pattern: repeating(800.0, 970.0, 9.0),
    },
    TonePatternSpec {
        id: 30,
        frequency: "800Hz – 970Hz @ 3Hz",
        description: "800Hz – 970Hz @ 3Hz",
        dip_switches: "I-I-I-O-I",
        standard: None,
        pattern: repeating(800.0, 970.0, 3.0),
    },
    TonePatternSpec {
        id: 31,
        frequency: "800Hz",
        description: "800Hz, 0.25s ON/1s OFF",
        dip_switches: "I-I-I-I-O",
        standard: None,
        pattern: pulsed(800.0, 0.25, 1.0),
    },
    TonePatternSpec {
        id: 32,
        frequency: "500Hz – 1200Hz",
        description: "500Hz – 1200Hz, 3.75s/0.25s OFF",
        dip_switches: "I-I-I-I-I",
        standard: Some("AS2220"),
        pattern: gated(500.0, 1200.0, 3.75, 0.25),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(tones: &[&TonePatternSpec]) -> Vec<u8> {
        tones.iter().map(|tone| tone.id).collect()
    }

    #[test]
    fn test_table_is_indexed_by_id() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 32);
        for (index, tone) in catalog.iter().enumerate() {
            assert_eq!(tone.id as usize, index + 1);
            assert_eq!(catalog.resolve(tone.id), Some(tone));
        }
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(33).is_none());
        assert!(catalog.resolve(99).is_none());
    }

    #[test]
    fn test_every_pattern_validates() {
        for tone in Catalog::new().iter() {
            let pattern = tone.pattern.expect("built-in tones carry a pattern");
            pattern
                .validate()
                .unwrap_or_else(|e| panic!("tone {}: {}", tone.id, e));
        }
    }

    #[test]
    fn test_dip_switches_select_their_tone() {
        for tone in Catalog::new().iter() {
            let dip: DipSwitches = tone.dip_switches.parse().unwrap();
            assert_eq!(dip.tone_id(), tone.id, "dip {}", tone.dip_switches);
        }
    }

    #[test]
    fn test_find_by_dip_switches() {
        let catalog = Catalog::new();
        let tone = catalog.find_by_dip_switches("O-I-O-I-O").unwrap().unwrap();
        assert_eq!(tone.id, 11);
        assert!(catalog.find_by_dip_switches("O-I-O").is_err());
        assert_eq!(catalog.dip_switches(32), Some("I-I-I-I-I"));
    }

    #[test]
    fn test_search_by_standard_ignores_case() {
        let catalog = Catalog::new();
        assert_eq!(ids(&catalog.search_by_standard("as1670")), vec![8, 9, 28]);
        assert_eq!(ids(&catalog.search_by_standard("ISO")), vec![11, 12]);
        assert!(catalog.search_by_standard("BS 5839").is_empty());
    }

    #[test]
    fn test_search_by_frequency() {
        let catalog = Catalog::new();
        assert_eq!(ids(&catalog.search_by_frequency(660)), vec![19, 20, 21]);
        assert_eq!(ids(&catalog.search_by_frequency(2850)), vec![12]);
    }

    #[test]
    fn test_search_by_pattern() {
        let catalog = Catalog::new();
        assert_eq!(
            ids(&catalog.search_by_pattern(PatternKind::Continuous)),
            vec![1, 14, 17, 18, 19]
        );
        assert_eq!(
            ids(&catalog.search_by_pattern(PatternKind::PulsedBurst)),
            vec![11, 12]
        );
        assert_eq!(
            ids(&catalog.search_by_pattern(PatternKind::SweptBurst)),
            vec![9, 28]
        );
        let total: usize = PatternKind::ALL
            .iter()
            .map(|kind| catalog.search_by_pattern(*kind).len())
            .sum();
        assert_eq!(total, 32);
    }

    #[test]
    fn test_evacuation_and_alert_tones() {
        let catalog = Catalog::new();
        assert_eq!(ids(&catalog.evacuation_tones()), vec![9, 28]);
        assert_eq!(ids(&catalog.alert_tones()), vec![8]);
    }

    #[test]
    fn test_standards_sorted_and_unique() {
        assert_eq!(
            Catalog::new().standards(),
            vec![
                "AFNOR NF S 32 001",
                "AS1670",
                "AS2220",
                "DIN 33 404",
                "ISO 8201",
                "NEN 2575:2000",
            ]
        );
    }

    #[test]
    fn test_slice_catalog_resolves() {
        let custom = vec![TonePatternSpec {
            id: 40,
            frequency: "1234Hz",
            description: "test tone",
            dip_switches: "",
            standard: None,
            pattern: None,
        }];
        assert_eq!(custom.resolve(40).map(|tone| tone.frequency), Some("1234Hz"));
        assert!(custom.resolve(1).is_none());
        assert_eq!(custom[0].kind(), None);
    }
}
