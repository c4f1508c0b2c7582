use thiserror::Error;

pub type Result<T> = std::result::Result<T,RelaxError>;

#[derive(Error, Debug)]
pub enum RelaxError {
    /// A configuration constant is out of range. Fatal at startup
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfig { field:String, value:String, reason:String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl RelaxError {
    pub fn invalid(field:&str,value:impl ToString,reason:&str) -> Self {
        RelaxError::InvalidConfig {
            field:field.to_string(),
            value:value.to_string(),
            reason:reason.to_string(),
        }
    }
}
