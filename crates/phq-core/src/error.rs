use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("item index {0} is outside 1..=9")]
    InvalidItem(u8),

    #[error("item {item}: {value} points is outside 0..=3")]
    InvalidPoints { item: u8, value: u8 },

    #[error("no result has been computed for this session yet")]
    ResultNotReady,
}
