// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numerals::logging::init_logging;
use roman_numerals::prelude::*;

fn main() -> Result<(), NumeralError> {
    init_logging();

    println!("=== Roman Numerals Example ===\n");

    println!("--- Codec ---");
    println!("get_max_parsable_number : {}", get_max_parsable_number());
    println!("is_valid_roman(\"III\")   : {}", is_valid_roman("III"));
    println!("encode(123)             : {}", encode(123)?);
    println!("decode(\"XIII\")          : {}", decode("XIII")?);
    println!("add(10, 20)             : {:?}", add(10, 20)?);
    println!("subtract(30, 5)         : {:?}", subtract(30, 5)?);

    println!("\n--- Numeral Value ---");
    let mut value = NumeralValue::new(30)?;
    println!("number                  : {}", value.number());
    println!("roman_number            : {}", value.roman_number());

    value.plus(5)?;
    println!("plus(5)                 : {:?}", value);

    value.minus(5)?;
    println!("minus(5)                : {:?}", value);

    value.set_roman("XL")?;
    println!("set_roman(\"XL\")         : {:?}", value);

    println!("\n--- Errors ---");
    let failures = [
        encode(4000).map(|_| ()),
        decode("IIII").map(|_| ()),
        subtract(1, 5).map(|_| ()),
    ];
    for result in failures {
        if let Err(err) = result {
            println!("{}", err);
        }
    }

    Ok(())
}
