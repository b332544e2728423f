use std::str::FromStr;
use std::sync::mpsc::{SendError, Sender};

use uci::{UciOption, UciOptionType, UciOutput};

use crate::MAX_DEPTH;

macro_rules! define_config {
    ($(($field:ident: $type:ty, $uci_name:literal, $uci_type:expr, $default:expr)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct SearchConfig {
            $(pub $field: ConfigParam<$type>,)*
        }

        impl Default for SearchConfig {
            fn default() -> Self {
                Self {
                    $($field: ConfigParam {
                        value: $default,
                        uci: UciOption { name: $uci_name, option_type: $uci_type },
                    },)*
                }
            }
        }

        impl SearchConfig {
            pub fn update_from_uci(&mut self, uci_name: &str, value: &str) -> Result<(), String> {
                match uci_name {
                    $($uci_name => self.$field.update_from_uci(value),)*
                    _ => Err(format!("Unknown parameter: {}", uci_name)),
                }
            }

            pub fn to_uci(&self, output: &Sender<UciOutput>) -> Result<(), SendError<UciOutput>> {
                $(output.send(UciOutput::Option(self.$field.to_uci()))?;)*
                Ok(())
            }
        }
    };
}

define_config!(
    // Plies searched when `go` carries no depth.
    (depth: u8, "Depth", UciOptionType::Spin { min: 1, max: MAX_DEPTH as i32 }, 3),

    // Workers scoring root moves in parallel.
    (threads: usize, "Threads", UciOptionType::Spin { min: 1, max: 256 }, 1),

    // Ranked lines reported per search.
    (multi_pv: usize, "MultiPV", UciOptionType::Spin { min: 1, max: 256 }, 1),
);

#[derive(Debug, Clone)]
pub struct ConfigParam<T> {
    pub value: T,
    pub uci: UciOption,
}

impl<T> ConfigParam<T>
where
    T: FromStr + ToString,
    T::Err: std::fmt::Display,
{
    pub fn update_from_uci(&mut self, value: &str) -> Result<(), String> {
        self.uci.option_type.validate(value)?;

        self.value = value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Parse error: {}", e))?;
        Ok(())
    }

    pub fn to_uci(&self) -> String {
        self.uci.option_type.to_uci(self.uci.name, &self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.depth.value, 3);
        assert_eq!(config.threads.value, 1);
        assert_eq!(config.multi_pv.value, 1);
    }

    #[test]
    fn test_update_from_uci() {
        let mut config = SearchConfig::default();

        config.update_from_uci("Depth", "5").unwrap();
        config.update_from_uci("Threads", "8").unwrap();
        config.update_from_uci("MultiPV", "3").unwrap();

        assert_eq!(config.depth.value, 5);
        assert_eq!(config.threads.value, 8);
        assert_eq!(config.multi_pv.value, 3);
    }

    #[test]
    fn test_update_rejects_bad_values() {
        let mut config = SearchConfig::default();

        assert!(config.update_from_uci("Depth", "0").is_err());
        assert!(config.update_from_uci("Depth", "101").is_err());
        assert!(config.update_from_uci("Threads", "many").is_err());
        assert!(config.update_from_uci("Hash", "64").is_err());

        assert_eq!(config.depth.value, 3);
        assert_eq!(config.threads.value, 1);
    }

    #[test]
    fn test_to_uci() {
        let (tx, rx) = channel();
        SearchConfig::default().to_uci(&tx).unwrap();
        drop(tx);

        let lines: Vec<String> = rx
            .iter()
            .map(|output| match output {
                UciOutput::Option(line) => line,
                other => panic!("Unexpected output {:?}", other),
            })
            .collect();

        assert_eq!(
            lines,
            vec![
                "option name Depth type spin default 3 min 1 max 100",
                "option name Threads type spin default 1 min 1 max 256",
                "option name MultiPV type spin default 1 min 1 max 256",
            ]
        );
    }
}
