//! Conversion from domain types to wire values.
//!
//! The carrier takes one unit system per shipment, so every package must
//! agree on it. Street lines are spread over the schema's three slots.

use tracing::trace;

use crate::domain::{Party, ShipmentRequest, UnitSystem};

use super::config::ConversionConfig;
use super::error::ConversionError;
use super::request::{
    Address, Commodities, Contact, DangerousGoods, DangerousGoodsContent, DropOffType,
    InternationalDetail, PackageDimensions, RequestedPackage, RequestedPackages,
    RequestedShipment, Ship, ShipParty, ShipmentInfo, SpecialService, SpecialServices,
    UnitOfMeasurement,
};

/// Format of the ship timestamp. Times are always sent in UTC.
const SHIP_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S GMT+00:00";

/// Convert a shipment request to the carrier's wire values.
pub fn convert_shipment_request(
    request: &ShipmentRequest,
    config: &ConversionConfig,
) -> Result<RequestedShipment, ConversionError> {
    let details = request.shipment_details();

    let unit_of_measurement = match request.unit_system() {
        Some(UnitSystem::Metric) => UnitOfMeasurement::Si,
        Some(UnitSystem::Imperial) => UnitOfMeasurement::Su,
        None => return Err(ConversionError::MixedUnitSystems),
    };

    let ship_timestamp = details
        .ready_at()
        .ok_or(ConversionError::InvalidTimestamp(details.ready_at_timestamp()))?
        .format(SHIP_TIMESTAMP_FORMAT)
        .to_string();

    let drop_off_type = if details.is_unscheduled_pickup() {
        DropOffType::RequestCourier
    } else {
        DropOffType::RegularPickup
    };

    let insurance = request.insurance();
    let shipment_info = ShipmentInfo {
        drop_off_type,
        service_type: details.service_type().to_string(),
        account: request.payer_account_number().to_string(),
        currency: details.currency_code().to_string(),
        unit_of_measurement,
        label_type: config.label_type,
        label_template: config.label_template.clone(),
        paperless_trade_enabled: config.paperless_trade,
        special_services: SpecialServices {
            service: vec![SpecialService {
                service_type: SpecialService::INSURANCE.to_string(),
                service_value: insurance.value(),
                currency_code: insurance.currency_code().to_string(),
            }],
        },
    };

    let ship = Ship {
        shipper: convert_party(request.shipper(), "shipper")?,
        recipient: convert_party(request.recipient(), "recipient")?,
    };

    let requested_packages = request
        .packages()
        .iter()
        .map(|package| {
            let dims = package.dimensions();
            RequestedPackage {
                number: package.sequence_number(),
                weight: package.weight().value,
                weight_uom: package.weight().uom.as_str().to_string(),
                dimensions: PackageDimensions {
                    length: dims.length,
                    width: dims.width,
                    height: dims.height,
                },
                dimensions_uom: dims.uom.as_str().to_string(),
                customer_references: package.customer_references().to_string(),
            }
        })
        .collect();

    let dry_ice = request.dry_ice();
    let dangerous_goods = DangerousGoods {
        content: DangerousGoodsContent {
            content_id: dry_ice.content_id().to_string(),
            dry_ice_total_net_weight: dry_ice.weight(),
            un_code: dry_ice.un_code().to_string(),
        },
    };

    trace!(
        packages = request.packages().len(),
        ?unit_of_measurement,
        "converted shipment request"
    );

    Ok(RequestedShipment {
        shipment_info,
        ship_timestamp,
        payment_info: details.terms_of_trade().to_string(),
        international_detail: InternationalDetail {
            commodities: Commodities {
                number_of_pieces: details.number_of_pieces(),
                description: details.description().to_string(),
            },
            content: details.content_type().to_string(),
        },
        ship,
        packages: RequestedPackages { requested_packages },
        dangerous_goods,
    })
}

/// Convert a party to its contact and address.
fn convert_party(party: &Party, role: &'static str) -> Result<ShipParty, ConversionError> {
    Ok(ShipParty {
        contact: Contact {
            person_name: party.name().to_string(),
            company_name: party.company().to_string(),
            phone_number: party.phone().to_string(),
        },
        address: convert_address(party, role)?,
    })
}

fn convert_address(party: &Party, role: &'static str) -> Result<Address, ConversionError> {
    let lines = party.street_lines();
    if lines.len() > 3 {
        return Err(ConversionError::TooManyStreetLines {
            party: role,
            count: lines.len(),
        });
    }

    let mut lines = lines.iter().cloned();

    Ok(Address {
        street_lines: lines.next().unwrap_or_default(),
        street_lines2: lines.next(),
        street_lines3: lines.next(),
        city: party.city().to_string(),
        postal_code: party.postal_code().to_string(),
        country_code: party.country_code().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ShipmentRequestBuilder;

    fn builder(street_lines: &[&str]) -> ShipmentRequestBuilder {
        let mut builder = ShipmentRequestBuilder::new();
        builder
            .set_unscheduled_pickup(true)
            .set_terms_of_trade("DAP")
            .set_content_type("NON_DOCUMENTS")
            .set_ready_at_timestamp(1_710_498_600)
            .set_number_of_pieces(1)
            .set_currency("EUR")
            .set_description("Vaccines")
            .set_service_type("P")
            .set_payer_account_number("123456789")
            .set_insurance(250.0, "EUR")
            .set_shipper(
                "DE",
                "04229",
                "Leipzig",
                street_lines.iter().copied(),
                "Max Mustermann",
                "Acme",
                "0341 1234",
            )
            .set_recipient("US", "10001", "New York", ["350 5th Ave"], "Jane Doe", "Corp", "555 0100")
            .set_dry_ice("UN1845", 2.5);
        builder
    }

    fn metric_request() -> ShipmentRequest {
        let mut b = builder(&["Nonnenstr. 11d", "Hinterhaus"]);
        b.add_package(1, 1500.0, "G", 30.0, 20.0, 10.0, "CM", "ref-1")
            .unwrap();
        b.build().unwrap()
    }

    #[test]
    fn converts_metric_request() {
        let wire = convert_shipment_request(&metric_request(), &ConversionConfig::default()).unwrap();

        assert_eq!(wire.shipment_info.drop_off_type, DropOffType::RequestCourier);
        assert_eq!(wire.shipment_info.unit_of_measurement, UnitOfMeasurement::Si);
        assert_eq!(wire.shipment_info.account, "123456789");
        assert_eq!(wire.ship_timestamp, "2024-03-15T10:30:00 GMT+00:00");
        assert_eq!(wire.payment_info, "DAP");
        assert_eq!(wire.international_detail.content, "NON_DOCUMENTS");

        let service = &wire.shipment_info.special_services.service[0];
        assert_eq!(service.service_type, "II");
        assert_eq!(service.service_value, 250.0);

        let package = &wire.packages.requested_packages[0];
        assert_eq!(package.number, 1);
        assert_eq!(package.weight, 1.5);
        assert_eq!(package.dimensions.length, 30.0);

        assert_eq!(wire.dangerous_goods.content.content_id, "901");
        assert_eq!(wire.dangerous_goods.content.un_code, "UN1845");
    }

    #[test]
    fn street_lines_fill_slots_in_order() {
        let wire = convert_shipment_request(&metric_request(), &ConversionConfig::default()).unwrap();

        let shipper = &wire.ship.shipper.address;
        assert_eq!(shipper.street_lines, "Nonnenstr. 11d");
        assert_eq!(shipper.street_lines2.as_deref(), Some("Hinterhaus"));
        assert_eq!(shipper.street_lines3, None);

        let recipient = &wire.ship.recipient.address;
        assert_eq!(recipient.street_lines, "350 5th Ave");
        assert_eq!(recipient.street_lines2, None);
        assert_eq!(wire.ship.recipient.contact.person_name, "Jane Doe");
    }

    #[test]
    fn too_many_street_lines() {
        let mut b = builder(&["a", "b", "c", "d"]);
        b.add_package(1, 1.0, "KG", 1.0, 1.0, 1.0, "CM", "").unwrap();
        let request = b.build().unwrap();

        let err = convert_shipment_request(&request, &ConversionConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ConversionError::TooManyStreetLines {
                party: "shipper",
                count: 4
            }
        );
    }

    #[test]
    fn imperial_request_uses_su() {
        let mut b = builder(&["Street"]);
        b.add_package(1, 32.0, "OZ", 1.0, 1.0, 1.0, "YD", "").unwrap();
        let request = b.build().unwrap();

        let wire = convert_shipment_request(&request, &ConversionConfig::default()).unwrap();
        assert_eq!(wire.shipment_info.unit_of_measurement, UnitOfMeasurement::Su);
        assert_eq!(wire.packages.requested_packages[0].weight, 2.0);
        assert_eq!(wire.packages.requested_packages[0].dimensions.height, 36.0);
        assert_eq!(wire.packages.requested_packages[0].weight_uom, "LB");
        assert_eq!(wire.packages.requested_packages[0].dimensions_uom, "IN");

        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains(r#""WeightUOM":"LB""#));
        assert!(json.contains(r#""DimensionsUOM":"IN""#));
    }

    #[test]
    fn mixed_unit_systems_rejected() {
        let mut b = builder(&["Street"]);
        b.add_package(1, 1.0, "KG", 1.0, 1.0, 1.0, "CM", "")
            .unwrap()
            .add_package(2, 1.0, "LB", 1.0, 1.0, 1.0, "IN", "")
            .unwrap();
        let request = b.build().unwrap();

        let err = convert_shipment_request(&request, &ConversionConfig::default()).unwrap_err();
        assert_eq!(err, ConversionError::MixedUnitSystems);
    }

    #[test]
    fn regular_pickup_and_config_options() {
        let mut b = builder(&["Street"]);
        b.set_unscheduled_pickup(false)
            .add_package(1, 1.0, "KG", 1.0, 1.0, 1.0, "CM", "")
            .unwrap();
        let request = b.build().unwrap();

        let config = ConversionConfig::default()
            .with_label_type(crate::webservice::LabelType::Zpl)
            .with_paperless_trade(true);
        let wire = convert_shipment_request(&request, &config).unwrap();

        assert_eq!(wire.shipment_info.drop_off_type, DropOffType::RegularPickup);
        assert_eq!(wire.shipment_info.label_type, crate::webservice::LabelType::Zpl);
        assert!(wire.shipment_info.paperless_trade_enabled);
    }

    #[test]
    fn serialized_shape() {
        let wire = convert_shipment_request(&metric_request(), &ConversionConfig::default()).unwrap();
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["ShipmentInfo"]["UnitOfMeasurement"], "SI");
        assert_eq!(json["ShipmentInfo"]["DropOffType"], "REQUEST_COURIER");
        assert_eq!(json["ShipmentInfo"]["LabelType"], "PDF");
        assert_eq!(json["Packages"]["RequestedPackages"][0]["@number"], 1);
        assert_eq!(json["Packages"]["RequestedPackages"][0]["WeightUOM"], "KG");
        assert_eq!(json["Packages"]["RequestedPackages"][0]["DimensionsUOM"], "CM");
        assert_eq!(json["DangerousGoods"]["Content"]["ContentID"], "901");
        assert_eq!(json["DangerousGoods"]["Content"]["UNCode"], "UN1845");
        assert_eq!(json["Ship"]["Shipper"]["Address"]["StreetLines2"], "Hinterhaus");
        assert!(json["Ship"]["Recipient"]["Address"].get("StreetLines2").is_none());
    }
}
