/// The physical quantity a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Area,
    Volume,
    Mass,
    Temperature,
    Speed,
    Data,
}

/// A measurement unit and every phrase that names it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct UnitDef {
    /// Canonical singular name, such as `"kilogram"`.
    pub name:      &'static str,
    /// Short symbol, such as `"kg"`.
    pub symbol:    &'static str,
    pub dimension: Dimension,
    /// Every spelling accepted after a number, including `symbol`.
    pub aliases:   &'static [&'static str],
}

/// A currency and its written forms.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CurrencyDef {
    /// ISO 4217 code.
    pub code:   &'static str,
    /// Prefix sign, if the currency has one the tokenizer recognizes.
    pub symbol: Option<char>,
    pub name:   &'static str,
}

macro_rules! unit {
    ($name:literal, $symbol:literal, $dimension:ident, [$($alias:literal),* $(,)?]) => {
        UnitDef { name:      $name,
                  symbol:    $symbol,
                  dimension: Dimension::$dimension,
                  aliases:   &[$symbol, $($alias),*], }
    };
}

/// Every unit the tokenizer can attach to a number.
///
/// Time units are absent: a number followed by `day`, `week` and so on is a
/// duration, not a quantity.
pub static UNITS: &[UnitDef] = &[
    unit!("millimeter", "mm", Length, ["millimeter", "millimeters", "millimetre", "millimetres"]),
    unit!("centimeter", "cm", Length, ["centimeter", "centimeters", "centimetre", "centimetres"]),
    unit!("meter", "m", Length, ["meter", "meters", "metre", "metres"]),
    unit!("kilometer", "km", Length, ["kilometer", "kilometers", "kilometre", "kilometres"]),
    unit!("inch", "″", Length, ["inch", "inches"]),
    unit!("foot", "ft", Length, ["foot", "feet"]),
    unit!("yard", "yd", Length, ["yard", "yards"]),
    unit!("mile", "mi", Length, ["mile", "miles"]),
    unit!("square meter", "m2", Area, ["square meter", "square meters", "square metre", "square metres", "sqm"]),
    unit!("square foot", "sqft", Area, ["square foot", "square feet"]),
    unit!("square kilometer", "km2", Area, ["square kilometer", "square kilometers"]),
    unit!("acre", "ac", Area, ["acre", "acres"]),
    unit!("hectare", "ha", Area, ["hectare", "hectares"]),
    unit!("milliliter", "ml", Volume, ["milliliter", "milliliters", "millilitre", "millilitres"]),
    unit!("liter", "l", Volume, ["liter", "liters", "litre", "litres"]),
    unit!("cubic meter", "m3", Volume, ["cubic meter", "cubic meters", "cubic metre", "cubic metres"]),
    unit!("gallon", "gal", Volume, ["gallon", "gallons"]),
    unit!("fluid ounce", "floz", Volume, ["fluid ounce", "fluid ounces", "fl oz"]),
    unit!("cup", "cup", Volume, ["cups"]),
    unit!("milligram", "mg", Mass, ["milligram", "milligrams"]),
    unit!("gram", "g", Mass, ["gram", "grams"]),
    unit!("kilogram", "kg", Mass, ["kilogram", "kilograms", "kilo", "kilos"]),
    unit!("tonne", "t", Mass, ["tonne", "tonnes", "metric ton", "metric tons"]),
    unit!("ounce", "oz", Mass, ["ounce", "ounces"]),
    unit!("pound", "lb", Mass, ["pound", "pounds", "lbs"]),
    unit!("degree celsius", "°C", Temperature, ["celsius", "degrees celsius", "degree celsius"]),
    unit!("degree fahrenheit", "°F", Temperature, ["fahrenheit", "degrees fahrenheit", "degree fahrenheit"]),
    unit!("kelvin", "K", Temperature, ["kelvin", "kelvins"]),
    unit!("kilometer per hour", "kmh", Speed, ["kph", "kilometers per hour", "kilometres per hour"]),
    unit!("mile per hour", "mph", Speed, ["miles per hour"]),
    unit!("meter per second", "mps", Speed, ["meters per second", "metres per second"]),
    unit!("byte", "B", Data, ["byte", "bytes"]),
    unit!("kilobyte", "KB", Data, ["kilobyte", "kilobytes"]),
    unit!("megabyte", "MB", Data, ["megabyte", "megabytes"]),
    unit!("gigabyte", "GB", Data, ["gigabyte", "gigabytes"]),
    unit!("terabyte", "TB", Data, ["terabyte", "terabytes"]),
];

/// Currencies with a recognized prefix sign or a common code.
pub static CURRENCIES: &[CurrencyDef] = &[
    CurrencyDef { code: "USD", symbol: Some('$'), name: "US dollar" },
    CurrencyDef { code: "EUR", symbol: Some('€'), name: "euro" },
    CurrencyDef { code: "GBP", symbol: Some('£'), name: "pound sterling" },
    CurrencyDef { code: "JPY", symbol: Some('¥'), name: "Japanese yen" },
    CurrencyDef { code: "CAD", symbol: None, name: "Canadian dollar" },
    CurrencyDef { code: "AUD", symbol: None, name: "Australian dollar" },
    CurrencyDef { code: "CHF", symbol: None, name: "Swiss franc" },
    CurrencyDef { code: "CNY", symbol: None, name: "Chinese yuan" },
    CurrencyDef { code: "INR", symbol: None, name: "Indian rupee" },
    CurrencyDef { code: "MXN", symbol: None, name: "Mexican peso" },
    CurrencyDef { code: "SEK", symbol: None, name: "Swedish krona" },
    CurrencyDef { code: "NZD", symbol: None, name: "New Zealand dollar" },
];

/// Finds the unit named by `phrase`.
///
/// Aliases of one or two characters are matched exactly so that `m` and `M`
/// or `B` and `b` stay distinct; longer aliases ignore ASCII case. Internal
/// whitespace in `phrase` must be single spaces.
///
/// # Example
/// ```
/// use calcnote::interpreter::units::{Dimension, lookup_unit};
///
/// assert_eq!(lookup_unit("Kilograms").map(|u| u.symbol), Some("kg"));
/// assert_eq!(lookup_unit("square feet").map(|u| u.dimension), Some(Dimension::Area));
/// assert!(lookup_unit("apples").is_none());
/// ```
#[must_use]
pub fn lookup_unit(phrase: &str) -> Option<&'static UnitDef> {
    UNITS.iter().find(|unit| {
                    unit.aliases.iter().any(|alias| {
                                           if alias.chars().count() <= 2 {
                                               *alias == phrase
                                           } else {
                                               alias.eq_ignore_ascii_case(phrase)
                                           }
                                       })
                })
}

/// Maps a prefix sign such as `$` to its currency.
#[must_use]
pub fn currency_for_symbol(symbol: char) -> Option<&'static CurrencyDef> {
    CURRENCIES.iter().find(|c| c.symbol == Some(symbol))
}

/// Looks up a currency by ISO code. Only the codes in [`CURRENCIES`] are
/// known; the tokenizer itself accepts any three uppercase letters.
#[must_use]
pub fn currency_for_code(code: &str) -> Option<&'static CurrencyDef> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Whether `c` is a currency sign the tokenizer accepts in front of a number.
#[must_use]
pub const fn is_currency_symbol(c: char) -> bool {
    matches!(c, '$' | '€' | '£' | '¥')
}

/// Whether `text` has the shape of an ISO 4217 code: three ASCII uppercase
/// letters.
#[must_use]
pub fn is_currency_code_shape(text: &str) -> bool {
    text.len() == 3 && text.bytes().all(|b| b.is_ascii_uppercase())
}
