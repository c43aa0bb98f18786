//! Fluent query builder for store listings.

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::{HttpClient, Transport, Traverser};
use crate::stores::StoresClient;

/// A query builder for querying stores.
///
/// Obtained from [`StoresClient::begin_query`]. Filter methods consume and
/// return the builder, so calls chain in any order; setting the same filter
/// twice keeps only the last value. The terminal [`execute`](Self::execute)
/// hands the accumulated parameters to [`StoresClient::query`].
///
/// # Example
///
/// ```rust,ignore
/// let mut stores = client
///     .begin_query()
///     .of_brand("netto")
///     .in_city("Aarhus")
///     .execute();
///
/// while let Some(page) = stores.next().await? {
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct StoresQuery<'a, T = HttpClient> {
    client: &'a StoresClient<T>,
    params: HashMap<String, String>,
}

impl<'a, T: Transport> StoresQuery<'a, T> {
    /// Constructs a new query builder with an empty parameter mapping.
    pub(crate) fn new(client: &'a StoresClient<T>) -> Self {
        Self {
            client,
            params: HashMap::new(),
        }
    }

    /// Sets a parameter for the request being built.
    ///
    /// Any prior value for `param` is replaced. No validation is performed;
    /// any parameter name the upstream API understands may be set.
    #[must_use]
    pub fn set(mut self, param: impl Into<String>, value: impl Display) -> Self {
        self.params.insert(param.into(), value.to_string());
        self
    }

    /// Returns only the given fields of each store.
    ///
    /// Overwrites any previous selection.
    #[must_use]
    pub fn pick<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let joined = fields
            .into_iter()
            .map(|field| field.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.params.insert("fields".to_string(), joined);
        self
    }

    /// Returns only stores of the given brand.
    #[must_use]
    pub fn of_brand(self, brand: impl Display) -> Self {
        self.set("brand", brand)
    }

    /// Returns only stores in the given city.
    #[must_use]
    pub fn in_city(self, city: impl Display) -> Self {
        self.set("city", city)
    }

    /// Returns only stores in the given ZIP code.
    #[must_use]
    pub fn in_zip(self, zip: impl Display) -> Self {
        self.set("zip", zip)
    }

    /// Returns only stores near a given coordinate, within `radius`
    /// kilometers.
    ///
    /// The coordinate is forwarded as `geo=<long>,<lat>` exactly as the
    /// caller formatted the values; no range validation is performed.
    #[must_use]
    pub fn near_coordinate(
        self,
        long: impl Display,
        lat: impl Display,
        radius: impl Display,
    ) -> Self {
        self.set("geo", format!("{long},{lat}")).set("radius", radius)
    }

    /// Returns only stores in the given country.
    ///
    /// Countries are specified using ISO 3166-1 alpha-2: DK for Denmark,
    /// SE for Sweden etc.
    #[must_use]
    pub fn in_country(self, country: impl Display) -> Self {
        self.set("country", country)
    }

    /// Executes the query, returning a traverser over the matching stores.
    ///
    /// No network I/O happens here; pages are fetched as the traverser is
    /// advanced.
    #[must_use]
    pub fn execute(self) -> Traverser<'a, T> {
        self.client.query(self.params)
    }
}
