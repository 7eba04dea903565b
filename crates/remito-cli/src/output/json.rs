use remito_core::error::RemitoError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), RemitoError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
