//! Common test utilities for edm-schema tests
//!
//! Descriptor builders plus a small sales model that exercises every kind of
//! declared type.

#![allow(dead_code)]

use edm_schema::source::{
    ConcurrencyMode, EdmMultiplicity, OperationKind, ParameterDirection, SourceEntitySet,
    SourceEnumType, SourceModel, SourceNavigationProperty, SourceOperation, SourceParameter,
    SourcePartner, SourceProperty, SourceSchemaType, SourceStructuredType, TypeReference,
};

pub const NS: &str = "Sales";

/// Qualified name in the test namespace
pub fn qn(name: &str) -> String {
    format!("{}.{}", NS, name)
}

/// Structural property with no concurrency token
pub fn property(name: &str, type_name: &str, nullable: bool) -> SourceProperty {
    SourceProperty {
        name: name.to_string(),
        type_ref: TypeReference::new(type_name, nullable),
        concurrency_mode: ConcurrencyMode::None,
    }
}

/// Navigation property whose partner is declared on `partner_type`
pub fn navigation(
    name: &str,
    target: &str,
    partner_name: &str,
    partner_type: &str,
    partner_multiplicity: EdmMultiplicity,
) -> SourceNavigationProperty {
    SourceNavigationProperty {
        name: name.to_string(),
        type_ref: TypeReference::new(target, true),
        partner: Some(SourcePartner {
            name: partner_name.to_string(),
            declaring_type: partner_type.to_string(),
            target_multiplicity: partner_multiplicity,
        }),
    }
}

/// Bare structured type in the test namespace
pub fn structured(name: &str, base: Option<&str>) -> SourceStructuredType {
    SourceStructuredType {
        namespace: NS.to_string(),
        name: name.to_string(),
        base_type: base.map(qn),
        ..Default::default()
    }
}

/// Entity type with a single `Id` key property
pub fn keyed_entity(name: &str) -> SourceStructuredType {
    SourceStructuredType {
        key: Some(vec!["Id".to_string()]),
        properties: vec![property("Id", "Edm.Int32", false)],
        ..structured(name, None)
    }
}

pub fn entity_set(name: &str, element_type: &str) -> SourceEntitySet {
    SourceEntitySet {
        name: name.to_string(),
        element_type: element_type.to_string(),
    }
}

/// A → B → C hierarchy where C declares the key
pub fn three_level_model() -> SourceModel {
    SourceModel::new()
        .with_type(SourceSchemaType::Entity(structured("A", Some("B"))))
        .with_type(SourceSchemaType::Entity(structured("B", Some("C"))))
        .with_type(SourceSchemaType::Entity(keyed_entity("C")))
}

/// Sales model: a person hierarchy, orders with a composite-key line entity,
/// complex and enum types, one function and one bound action.
pub fn sales_model() -> SourceModel {
    let person = SourceStructuredType {
        is_abstract: true,
        properties: vec![
            property("Id", "Edm.Int32", false),
            property("Name", "Edm.String", true),
        ],
        key: Some(vec!["Id".to_string()]),
        ..structured("Person", None)
    };

    let customer = SourceStructuredType {
        properties: vec![
            property("Email", "Edm.String", true),
            property("Address", &qn("Address"), true),
        ],
        navigation_properties: vec![navigation(
            "Orders",
            &format!("Collection({})", qn("Order")),
            "Customer",
            &qn("Order"),
            EdmMultiplicity::ZeroOrOne,
        )],
        ..structured("Customer", Some("Person"))
    };

    let vip_customer = SourceStructuredType {
        is_open: true,
        properties: vec![property("Tier", "Edm.Byte", false)],
        ..structured("VipCustomer", Some("Customer"))
    };

    let mut row_version = property("RowVersion", "Edm.Binary", false);
    row_version.concurrency_mode = ConcurrencyMode::Fixed;

    let order = SourceStructuredType {
        properties: vec![
            property("Id", "Edm.Int32", false),
            property("Total", "Edm.Decimal", false),
            property("Status", &qn("OrderStatus"), false),
            row_version,
        ],
        navigation_properties: vec![
            navigation(
                "Customer",
                &qn("Customer"),
                "Orders",
                &qn("Customer"),
                EdmMultiplicity::Many,
            ),
            navigation(
                "Lines",
                &format!("Collection({})", qn("OrderLine")),
                "Order",
                &qn("OrderLine"),
                EdmMultiplicity::One,
            ),
        ],
        ..keyed_entity("Order")
    };

    let order_line = SourceStructuredType {
        key: Some(vec!["OrderId".to_string(), "LineNo".to_string()]),
        properties: vec![
            property("OrderId", "Edm.Int32", false),
            property("LineNo", "Edm.Int16", false),
            property("Tags", "Collection(Edm.String)", false),
        ],
        navigation_properties: vec![navigation(
            "Order",
            &qn("Order"),
            "Lines",
            &qn("Order"),
            EdmMultiplicity::Many,
        )],
        ..structured("OrderLine", None)
    };

    let address = SourceStructuredType {
        properties: vec![
            property("Street", "Edm.String", true),
            property("City", "Edm.String", true),
        ],
        ..structured("Address", None)
    };

    let geo_address = SourceStructuredType {
        properties: vec![property("Location", "Edm.GeographyPoint", true)],
        ..structured("GeoAddress", Some("Address"))
    };

    let order_status = SourceEnumType {
        namespace: NS.to_string(),
        name: "OrderStatus".to_string(),
        members: vec![
            ("Open".to_string(), 0),
            ("Shipped".to_string(), 1),
            ("Cancelled".to_string(), 2),
        ],
    };

    let top_customers = SourceOperation {
        namespace: NS.to_string(),
        name: "TopCustomers".to_string(),
        kind: OperationKind::Function,
        is_bound: false,
        parameters: vec![SourceParameter {
            name: "count".to_string(),
            type_ref: TypeReference::new("Edm.Int32", false),
            direction: None,
        }],
        return_type: Some(TypeReference::new(
            format!("Collection({})", qn("Customer")),
            false,
        )),
    };

    let cancel_order = SourceOperation {
        namespace: NS.to_string(),
        name: "CancelOrder".to_string(),
        kind: OperationKind::Action,
        is_bound: true,
        parameters: vec![
            SourceParameter {
                name: "order".to_string(),
                type_ref: TypeReference::new(qn("Order"), false),
                direction: Some(ParameterDirection::In),
            },
            SourceParameter {
                name: "reason".to_string(),
                type_ref: TypeReference::new("Edm.String", true),
                direction: Some(ParameterDirection::In),
            },
        ],
        return_type: None,
    };

    SourceModel::new()
        .with_entity_set(entity_set("People", &format!("Collection({})", qn("Person"))))
        .with_entity_set(entity_set("Customers", &format!("Collection({})", qn("Customer"))))
        .with_entity_set(entity_set("Orders", &qn("Order")))
        .with_entity_set(entity_set("OrderLines", &format!("Collection({})", qn("OrderLine"))))
        // Subtypes are declared ahead of their bases on purpose
        .with_type(SourceSchemaType::Entity(vip_customer))
        .with_type(SourceSchemaType::Entity(customer))
        .with_type(SourceSchemaType::Entity(person))
        .with_type(SourceSchemaType::Entity(order))
        .with_type(SourceSchemaType::Entity(order_line))
        .with_type(SourceSchemaType::Complex(geo_address))
        .with_type(SourceSchemaType::Complex(address))
        .with_type(SourceSchemaType::Enum(order_status))
        .with_operation(top_customers)
        .with_operation(cancel_order)
}
