/// Where the query handler reads the city and country from.
pub trait InputSource {
    fn city(&self) -> String;
    fn country(&self) -> String;
}

/// An input source with fixed values, e.g. parsed from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct FixedInput {
    pub city: String,
    pub country: String,
}

impl FixedInput {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
        }
    }
}

impl InputSource for FixedInput {
    fn city(&self) -> String {
        self.city.clone()
    }

    fn country(&self) -> String {
        self.country.clone()
    }
}
