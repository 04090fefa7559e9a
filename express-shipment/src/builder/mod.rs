//! Staged builder for shipment requests.
//!
//! [`ShipmentRequestBuilder`] accumulates request data in any order through
//! chained setters, normalizes package units as packages are added, and
//! assembles an immutable [`ShipmentRequest`] on [`build`](ShipmentRequestBuilder::build).
//!
//! A successful build resets the builder, so one instance can be reused for
//! unrelated requests. Failed calls leave the accumulated state untouched.
//!
//! The builder is not synchronized. Give each caller its own instance.

use tracing::debug;

use crate::domain::{
    DryIce, IncompleteRequest, Insurance, InvalidUnit, Package, Party, Recipient, RequestField,
    ShipmentDetails, ShipmentRequest, Shipper, normalize_dimensions, normalize_weight,
};


/// Accumulates shipment data and builds a [`ShipmentRequest`].
///
/// # Examples
///
/// ```
/// use express_shipment::builder::ShipmentRequestBuilder;
/// use express_shipment::domain::{DimensionUom, WeightUom};
///
/// let mut builder = ShipmentRequestBuilder::new();
/// builder
///     .set_unscheduled_pickup(true)
///     .set_terms_of_trade("CFR")
///     .set_content_type("DOCUMENTS")
///     .set_ready_at_timestamp(1_700_000_000)
///     .set_number_of_pieces(1)
///     .set_currency("EUR")
///     .set_description("Books")
///     .set_service_type("U")
///     .set_payer_account_number("123456789")
///     .set_insurance(99.99, "EUR")
///     .set_shipper("DE", "04229", "Leipzig", ["Nonnenstr. 11d"], "Max", "Acme", "0341 1234")
///     .set_recipient("US", "10001", "New York", ["5th Ave"], "Jane", "Corp", "555 0100")
///     .set_dry_ice("UN1845", 2.5)
///     .add_package(1, 500.0, "G", 30.0, 20.0, 10.0, "CM", "ref-1")?;
///
/// let request = builder.build()?;
/// let package = &request.packages()[0];
/// assert_eq!(package.weight().value, 0.5);
/// assert_eq!(package.weight().uom, WeightUom::Kilogram);
/// assert_eq!(package.dimensions().uom, DimensionUom::Centimeter);
/// # Ok::<(), express_shipment::domain::RequestError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShipmentRequestBuilder {
    unscheduled_pickup: Option<bool>,
    terms_of_trade: Option<String>,
    content_type: Option<String>,
    ready_at_timestamp: Option<i64>,
    number_of_pieces: Option<u32>,
    currency_code: Option<String>,
    description: Option<String>,
    service_type: Option<String>,
    payer_account_number: Option<String>,
    insurance: Option<Insurance>,
    shipper: Option<Party>,
    recipient: Option<Party>,
    packages: Vec<Package>,
    dry_ice: Option<DryIce>,
}

impl ShipmentRequestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unscheduled_pickup(&mut self, unscheduled_pickup: bool) -> &mut Self {
        self.unscheduled_pickup = Some(unscheduled_pickup);
        self
    }

    /// Set the terms of trade (Incoterm), see [`codes::terms_of_trade`](crate::domain::codes::terms_of_trade).
    pub fn set_terms_of_trade(&mut self, terms_of_trade: impl Into<String>) -> &mut Self {
        self.terms_of_trade = Some(terms_of_trade.into());
        self
    }

    pub fn set_content_type(&mut self, content_type: impl Into<String>) -> &mut Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the time the shipment is ready for pickup, in seconds since the Unix epoch.
    pub fn set_ready_at_timestamp(&mut self, ready_at_timestamp: i64) -> &mut Self {
        self.ready_at_timestamp = Some(ready_at_timestamp);
        self
    }

    pub fn set_number_of_pieces(&mut self, number_of_pieces: u32) -> &mut Self {
        self.number_of_pieces = Some(number_of_pieces);
        self
    }

    /// Set the ISO 4217 currency code of the shipment.
    pub fn set_currency(&mut self, currency_code: impl Into<String>) -> &mut Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_service_type(&mut self, service_type: impl Into<String>) -> &mut Self {
        self.service_type = Some(service_type.into());
        self
    }

    pub fn set_payer_account_number(&mut self, account_number: impl Into<String>) -> &mut Self {
        self.payer_account_number = Some(account_number.into());
        self
    }

    pub fn set_insurance(&mut self, value: f64, currency_code: impl Into<String>) -> &mut Self {
        self.insurance = Some(Insurance::new(value, currency_code));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_shipper<I, S>(
        &mut self,
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        street_lines: I,
        name: impl Into<String>,
        company: impl Into<String>,
        phone: impl Into<String>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shipper = Some(party(
            country_code,
            postal_code,
            city,
            street_lines,
            name,
            company,
            phone,
        ));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_recipient<I, S>(
        &mut self,
        country_code: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
        street_lines: I,
        name: impl Into<String>,
        company: impl Into<String>,
        phone: impl Into<String>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipient = Some(party(
            country_code,
            postal_code,
            city,
            street_lines,
            name,
            company,
            phone,
        ));
        self
    }

    /// Normalize and append a package.
    ///
    /// Weight is converted to kilograms or pounds and dimensions to
    /// centimeters or inches (see [`normalize_weight`] and
    /// [`normalize_dimensions`]). If either unit is not recognized the
    /// package is not added and the builder is left unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn add_package(
        &mut self,
        sequence_number: u32,
        weight: f64,
        weight_uom: &str,
        length: f64,
        width: f64,
        height: f64,
        dimensions_uom: &str,
        customer_references: impl Into<String>,
    ) -> Result<&mut Self, InvalidUnit> {
        let weight = normalize_weight(weight, weight_uom)?;
        let dimensions = normalize_dimensions(length, width, height, dimensions_uom)?;

        debug!(
            sequence_number,
            weight = weight.value,
            weight_uom = %weight.uom,
            dimensions_uom = %dimensions.uom,
            "adding package"
        );

        self.packages.push(Package::new(
            sequence_number,
            weight,
            dimensions,
            customer_references,
        ));
        Ok(self)
    }

    /// Declare dry ice, see [`codes::UN_CODE_DRY_ICE`](crate::domain::codes::UN_CODE_DRY_ICE).
    pub fn set_dry_ice(&mut self, un_code: impl Into<String>, weight: f64) -> &mut Self {
        self.dry_ice = Some(DryIce::new(un_code, weight));
        self
    }

    /// Number of packages added so far.
    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    /// Every required field group that has not been supplied yet.
    pub fn missing_fields(&self) -> Vec<RequestField> {
        [
            (RequestField::UnscheduledPickup, self.unscheduled_pickup.is_some()),
            (RequestField::TermsOfTrade, self.terms_of_trade.is_some()),
            (RequestField::ContentType, self.content_type.is_some()),
            (RequestField::ReadyAtTimestamp, self.ready_at_timestamp.is_some()),
            (RequestField::NumberOfPieces, self.number_of_pieces.is_some()),
            (RequestField::Currency, self.currency_code.is_some()),
            (RequestField::Description, self.description.is_some()),
            (RequestField::ServiceType, self.service_type.is_some()),
            (RequestField::PayerAccountNumber, self.payer_account_number.is_some()),
            (RequestField::Insurance, self.insurance.is_some()),
            (RequestField::Shipper, self.shipper.is_some()),
            (RequestField::Recipient, self.recipient.is_some()),
            (RequestField::Packages, !self.packages.is_empty()),
            (RequestField::DryIce, self.dry_ice.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| (!present).then_some(field))
        .collect()
    }

    /// Assemble the accumulated data into a [`ShipmentRequest`].
    ///
    /// Fails with [`IncompleteRequest`] listing every missing field group,
    /// leaving the builder unchanged. On success the builder is reset to its
    /// empty state, so building again without supplying new data fails.
    pub fn build(&mut self) -> Result<ShipmentRequest, IncompleteRequest> {
        let (
            Some(unscheduled_pickup),
            Some(terms_of_trade),
            Some(content_type),
            Some(ready_at_timestamp),
            Some(number_of_pieces),
            Some(currency_code),
            Some(description),
            Some(service_type),
            Some(payer_account_number),
            Some(insurance),
            Some(shipper),
            Some(recipient),
            Some(dry_ice),
        ) = (
            self.unscheduled_pickup,
            self.terms_of_trade.as_deref(),
            self.content_type.as_deref(),
            self.ready_at_timestamp,
            self.number_of_pieces,
            self.currency_code.as_deref(),
            self.description.as_deref(),
            self.service_type.as_deref(),
            self.payer_account_number.as_deref(),
            self.insurance.as_ref(),
            self.shipper.as_ref(),
            self.recipient.as_ref(),
            self.dry_ice.as_ref(),
        )
        else {
            return Err(IncompleteRequest::new(self.missing_fields()));
        };

        if self.packages.is_empty() {
            return Err(IncompleteRequest::new(self.missing_fields()));
        }

        let shipment_details = ShipmentDetails::new(
            unscheduled_pickup,
            terms_of_trade,
            content_type,
            ready_at_timestamp,
            number_of_pieces,
            currency_code,
            description,
            service_type,
        );

        let request = ShipmentRequest::new(
            shipment_details,
            payer_account_number,
            insurance.clone(),
            Shipper::new(shipper.clone()),
            Recipient::new(recipient.clone()),
            std::mem::take(&mut self.packages),
            dry_ice.clone(),
        );

        *self = Self::default();

        debug!(
            packages = request.packages().len(),
            service_type = request.shipment_details().service_type(),
            "built shipment request, builder reset"
        );

        Ok(request)
    }
}

fn party<I, S>(
    country_code: impl Into<String>,
    postal_code: impl Into<String>,
    city: impl Into<String>,
    street_lines: I,
    name: impl Into<String>,
    company: impl Into<String>,
    phone: impl Into<String>,
) -> Party
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Party::new(
        country_code,
        postal_code,
        city,
        street_lines.into_iter().map(Into::into).collect(),
        name,
        company,
        phone,
    )
}
