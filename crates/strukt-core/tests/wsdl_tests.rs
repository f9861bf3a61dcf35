use strukt_core::error::NormalizeError;
use strukt_core::ir::{CanonicalType, MessageKind, OperationAction, PrimitiveKind};
use strukt_core::parse::xml::Document;
use strukt_core::transform::{
    auto_select_action, extract_actions, extract_namespace, extract_structure, list_operations,
    operation_info,
};
use strukt_core::{SourceKind, normalize};

const ORDER_SERVICE: &str = include_str!("fixtures/order-service.wsdl");
const NOTIFICATION_BINDING: &str = include_str!("fixtures/notification-binding.wsdl");
const EMPTY_PAYLOAD: &str = include_str!("fixtures/empty-payload.wsdl");
const NO_STRUCTURE: &str = include_str!("fixtures/no-structure.wsdl");

fn prim(kind: PrimitiveKind) -> CanonicalType {
    CanonicalType::Primitive(kind)
}

fn obj(fields: Vec<(&str, CanonicalType)>) -> CanonicalType {
    CanonicalType::Object(
        fields
            .into_iter()
            .map(|(name, ty)| (name.to_string(), ty))
            .collect(),
    )
}

fn arr(element: CanonicalType) -> CanonicalType {
    CanonicalType::Array(Box::new(element))
}

#[test]
fn extracts_message_bound_structure_in_order() {
    let structure = extract_structure(ORDER_SERVICE)
        .expect("should parse")
        .expect("wsdl has message-bound elements");

    let order_line = obj(vec![
        ("sku", prim(PrimitiveKind::String)),
        ("quantity", prim(PrimitiveKind::Integer)),
    ]);
    let expected = obj(vec![
        (
            "GetOrderRequest",
            obj(vec![
                ("orderId", prim(PrimitiveKind::String)),
                ("includeHistory", prim(PrimitiveKind::Boolean)),
            ]),
        ),
        (
            "GetOrderResponse",
            obj(vec![
                ("orderId", prim(PrimitiveKind::String)),
                ("placedAt", prim(PrimitiveKind::DateTime)),
                ("total", prim(PrimitiveKind::Decimal)),
                ("lines[]", arr(order_line)),
                (
                    "customer",
                    obj(vec![
                        ("name", prim(PrimitiveKind::String)),
                        ("tier", prim(PrimitiveKind::String)),
                    ]),
                ),
            ]),
        ),
        (
            "OrderFault",
            obj(vec![
                ("code", prim(PrimitiveKind::Integer)),
                ("reason", prim(PrimitiveKind::String)),
            ]),
        ),
        (
            "FeedbackRequest",
            obj(vec![
                ("orderId", prim(PrimitiveKind::String)),
                ("comments[]", arr(prim(PrimitiveKind::String))),
            ]),
        ),
    ]);
    assert_eq!(structure.root, expected);

    // Attached operation info comes from the first portType operation.
    let info = structure.operation_info.expect("wsdl declares operations");
    assert!(info.has_input);
    assert!(info.has_output);
    assert!(info.has_fault);
    assert!(info.is_synchronous);
    assert_eq!(
        info.message_types,
        [MessageKind::Input, MessageKind::Output, MessageKind::Fault]
    );
}

#[test]
fn rpc_style_part_resolves_bare_type() {
    let wsdl = r#"
      <definitions xmlns:xsd="http://www.w3.org/2001/XMLSchema"
          xmlns:tns="urn:calc" targetNamespace="urn:calc">
        <types>
          <xsd:schema targetNamespace="urn:calc">
            <xsd:complexType name="AddRequest">
              <xsd:sequence>
                <xsd:element name="a" type="xsd:int"/>
                <xsd:element name="b" type="xsd:int"/>
              </xsd:sequence>
            </xsd:complexType>
          </xsd:schema>
        </types>
        <message name="AddIn">
          <part name="request" type="tns:AddRequest"/>
        </message>
      </definitions>"#;
    let structure = extract_structure(wsdl).unwrap().unwrap();
    assert_eq!(
        structure.root,
        obj(vec![(
            "request",
            obj(vec![
                ("a", prim(PrimitiveKind::Integer)),
                ("b", prim(PrimitiveKind::Integer)),
            ]),
        )])
    );
    assert!(structure.operation_info.is_none());
}

#[test]
fn structure_extraction_is_idempotent() {
    let first = extract_structure(ORDER_SERVICE).unwrap();
    let second = extract_structure(ORDER_SERVICE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn no_extractable_elements_is_none() {
    assert!(extract_structure(NO_STRUCTURE).unwrap().is_none());
}

#[test]
fn zero_field_element_is_some_with_empty_object() {
    // Distinct from the "no structure" case above.
    let structure = extract_structure(EMPTY_PAYLOAD)
        .unwrap()
        .expect("schema declares an element");
    assert_eq!(structure.root, obj(vec![("Heartbeat", obj(vec![]))]));
}

#[test]
fn normalize_dispatches_wsdl_kind() {
    let via_normalize = normalize(SourceKind::Wsdl, ORDER_SERVICE).unwrap();
    let direct = extract_structure(ORDER_SERVICE).unwrap();
    assert_eq!(via_normalize, direct);
}

#[test]
fn lists_port_type_operations_in_declaration_order() {
    let names = list_operations(ORDER_SERVICE).unwrap();
    assert_eq!(names, ["GetOrder", "SubmitFeedback"]);
}

#[test]
fn falls_back_to_binding_operations() {
    let names = list_operations(NOTIFICATION_BINDING).unwrap();
    assert_eq!(names, ["Ping", "Notify"]);
}

#[test]
fn classifies_sync_and_one_way_operations() {
    let doc = Document::parse(ORDER_SERVICE).unwrap();
    let port_type = doc.elements("portType")[0];
    let ops: Vec<_> = doc
        .children(port_type)
        .iter()
        .copied()
        .filter(|&op| doc.local_name(op) == "operation")
        .collect();

    let get_order = operation_info(&doc, ops[0]);
    assert!(get_order.is_synchronous);

    let submit_feedback = operation_info(&doc, ops[1]);
    assert!(submit_feedback.has_input);
    assert!(!submit_feedback.has_output);
    assert!(!submit_feedback.is_synchronous);
    assert_eq!(submit_feedback.message_types, [MessageKind::Input]);
}

#[test]
fn extracts_actions_including_explicit_empty() {
    let actions = extract_actions(ORDER_SERVICE).unwrap();
    assert_eq!(
        actions,
        [
            OperationAction {
                operation: "GetOrder".to_string(),
                // First binding wins over the soap12 re-declaration.
                action: "urn:getOrder".to_string(),
            },
            OperationAction {
                operation: "SubmitFeedback".to_string(),
                action: String::new(),
            },
        ]
    );
}

#[test]
fn operation_without_action_declaration_is_omitted() {
    // Ping declares an action; Notify's descriptor carries none.
    let actions = extract_actions(NOTIFICATION_BINDING).unwrap();
    assert_eq!(
        actions,
        [OperationAction {
            operation: "Ping".to_string(),
            action: "urn:ping".to_string(),
        }]
    );
}

#[test]
fn auto_selects_only_a_single_candidate() {
    let single = extract_actions(NOTIFICATION_BINDING).unwrap();
    assert_eq!(
        auto_select_action(&single).map(|a| a.operation.as_str()),
        Some("Ping")
    );

    let several = extract_actions(ORDER_SERVICE).unwrap();
    assert!(auto_select_action(&several).is_none());
    assert!(auto_select_action(&[]).is_none());
}

#[test]
fn extracts_namespace_metadata() {
    let ns = extract_namespace(ORDER_SERVICE).expect("well-formed wsdl");
    assert_eq!(ns.uri, "http://example.com/orders");
    assert_eq!(ns.prefix, "tns");
    assert_eq!(ns.schema_location, "http://example.com/ws/orders");
}

#[test]
fn namespace_prefix_is_empty_when_none_is_bound() {
    let ns = extract_namespace(NOTIFICATION_BINDING).expect("well-formed wsdl");
    assert_eq!(ns.uri, "http://example.com/notify");
    // tns is bound to the target namespace here as well.
    assert_eq!(ns.prefix, "tns");

    let unbound = r#"<definitions targetNamespace="urn:svc"
        xmlns:other="urn:elsewhere"/>"#;
    let ns = extract_namespace(unbound).expect("well-formed document");
    assert_eq!(ns.uri, "urn:svc");
    assert_eq!(ns.prefix, "");
    assert_eq!(ns.schema_location, "");
}

#[test]
fn malformed_xml_is_a_typed_error() {
    let result = extract_structure("<definitions><types></definitions>");
    assert!(matches!(result, Err(NormalizeError::Xml(_))));
    assert!(extract_namespace("<definitions><types></definitions>").is_none());
}

/// Extraction passes must never panic, whatever the input.
#[test]
fn garbage_inputs_do_not_panic() {
    let inputs = [
        "",
        "not xml",
        "<definitions/>",
        "<definitions><message/></definitions>",
        "<schema><element/></schema>",
        "<binding><operation/></binding>",
    ];
    for input in inputs {
        let _ = extract_structure(input);
        let _ = list_operations(input);
        let _ = extract_actions(input);
        let _ = extract_namespace(input);
    }
}
