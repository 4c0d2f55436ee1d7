//! Settings management

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use cubit_core::{
    hash_text, DiceTerm, PlatformRandom, RandomError, RandomFactory, RandomProvider,
    SequenceRandom,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Random(#[from] RandomError),
}

/// Toolkit settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub random: RandomSettings,
    #[serde(default = "default_dice")]
    pub dice: Vec<DiceTerm>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomSettings {
    #[serde(default)]
    pub source: RandomSource,
}

/// Backend used for each thread's ambient provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RandomSource {
    /// Entropy-seeded, different every run.
    #[default]
    Platform,
    /// Reproducible: the n-th thread to materialize gets `seed + n`.
    Sequence { seed: u64 },
    /// As `Sequence`, with the base seed hashed from text.
    SequenceText { seed: String },
}

impl RandomSource {
    /// Factory that builds one provider per materializing thread.
    pub fn factory(&self) -> RandomFactory {
        match self {
            RandomSource::Platform => Box::new(|| -> Box<dyn RandomProvider> {
                Box::new(PlatformRandom::from_entropy())
            }),
            RandomSource::Sequence { seed } => sequence_factory(*seed),
            RandomSource::SequenceText { seed } => sequence_factory(hash_text(seed)),
        }
    }
}

fn sequence_factory(base: u64) -> RandomFactory {
    let streams = AtomicU64::new(0);
    Box::new(move || -> Box<dyn RandomProvider> {
        let n = streams.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(base, stream = n, "building sequence provider");
        Box::new(SequenceRandom::new(base.wrapping_add(n)))
    })
}

fn default_dice() -> Vec<DiceTerm> {
    vec![DiceTerm {
        repeat: 1,
        die_size: 20,
        constant: 0,
    }]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            random: RandomSettings::default(),
            dice: default_dice(),
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.random.source, RandomSource::Platform);
        assert_eq!(settings.dice[0].to_string(), "1d20");
    }

    #[test]
    fn parses_every_source_kind() {
        let seq = Settings::from_json(r#"{ "random": { "source": { "kind": "sequence", "seed": 42 } } }"#)
            .unwrap();
        assert_eq!(seq.random.source, RandomSource::Sequence { seed: 42 });

        let text = Settings::from_json(
            r#"{ "random": { "source": { "kind": "sequence_text", "seed": "campaign" } } }"#,
        )
        .unwrap();
        assert_eq!(
            text.random.source,
            RandomSource::SequenceText {
                seed: "campaign".to_string()
            }
        );

        let platform =
            Settings::from_json(r#"{ "random": { "source": { "kind": "platform" } } }"#).unwrap();
        assert_eq!(platform.random.source, RandomSource::Platform);
    }

    #[test]
    fn parses_dice_with_optional_constant() {
        let settings = Settings::from_json(
            r#"{ "dice": [ { "repeat": 3, "die_size": 6, "constant": 2 }, { "repeat": 1, "die_size": 8 } ] }"#,
        )
        .unwrap();
        assert_eq!(settings.dice[0].to_string(), "3d6+2");
        assert_eq!(settings.dice[1].constant, 0);
    }

    #[test]
    fn json_round_trip() {
        let settings = Settings {
            random: RandomSettings {
                source: RandomSource::Sequence { seed: 7 },
            },
            dice: vec![DiceTerm::new(2, 10, -1).unwrap()],
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn rejects_unknown_source_kind() {
        let err = Settings::from_json(r#"{ "random": { "source": { "kind": "quantum" } } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Settings::load("/definitely/not/here/cubit.json").unwrap_err();
        match err {
            SettingsError::Io { path, .. } => {
                assert!(path.ends_with("cubit.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sequence_factory_offsets_each_stream() {
        let factory = RandomSource::Sequence { seed: 100 }.factory();
        let mut first = factory();
        let mut second = factory();
        assert_eq!(first.next_f64(), SequenceRandom::new(100).next_f64());
        assert_eq!(second.next_f64(), SequenceRandom::new(101).next_f64());
    }

    #[test]
    fn text_factory_hashes_seed() {
        let factory = RandomSource::SequenceText {
            seed: "campaign".to_string(),
        }
        .factory();
        let mut rng = factory();
        assert_eq!(
            rng.next_f64(),
            SequenceRandom::new(hash_text("campaign")).next_f64()
        );
    }

    #[test]
    fn platform_factory_yields_unit_samples() {
        let factory = RandomSource::Platform.factory();
        let mut rng = factory();
        for _ in 0..1_000 {
            assert!((0.0..1.0).contains(&rng.next_f64()));
        }
    }
}
