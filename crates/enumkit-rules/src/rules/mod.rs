mod key_in_enum;
mod value_in_enum;

pub use key_in_enum::EnumKeyRule;
pub use value_in_enum::EnumValueRule;
