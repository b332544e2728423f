#[derive(Debug, Clone)]
pub struct UciOption {
    pub name: &'static str,
    pub option_type: UciOptionType,
}

#[derive(Debug, Clone)]
pub enum UciOptionType {
    Spin { min: i32, max: i32 },
}

impl UciOptionType {
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self {
            UciOptionType::Spin { min, max } => {
                let parsed = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid integer '{}': {}", value, e))?;
                if !(*min..=*max).contains(&parsed) {
                    return Err(format!("Value {} out of range [{}, {}]", parsed, min, max));
                }
                Ok(())
            }
        }
    }

    pub fn to_uci<T: ToString>(&self, name: &str, current_value: &T) -> String {
        match self {
            UciOptionType::Spin { min, max } => format!(
                "option name {} type spin default {} min {} max {}",
                name,
                current_value.to_string(),
                min,
                max
            ),
        }
    }
}
