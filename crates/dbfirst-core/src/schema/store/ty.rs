/// Storage type of a column, as reported by the database.
///
/// Only the broad families are distinguished. Anything else is kept verbatim in
/// [`Type::Custom`] so the code generator can still see it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Fixed precision number with the given precision and scale
    Decimal(u8, u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Raw bytes
    Binary,

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// Calendar date without a time of day
    Date,

    /// Date and time of day
    Timestamp,

    /// Any other database type, by its database name
    Custom(String),
}
