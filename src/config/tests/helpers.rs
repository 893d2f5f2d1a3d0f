//! Layer composition for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ExtractorConfig;

/// Configuration source, listed from lowest to highest precedence.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

impl Layer {
    fn push_onto(self, composer: &mut MergeComposer, value: Value) {
        match self {
            Self::Defaults => composer.push_defaults(value),
            Self::File => composer.push_file(value, None),
            Self::Environment => composer.push_environment(value),
            Self::Cli => composer.push_cli(value),
        }
    }
}

/// Merges `layers` in the order given into an [`ExtractorConfig`].
pub fn compose(layers: &[(Layer, Value)]) -> ExtractorConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers {
        layer.push_onto(&mut composer, value.clone());
    }
    ExtractorConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
