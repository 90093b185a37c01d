use super::*;

#[test]
fn list_item_deserializes_mongo_style_payload() {
    let item: ListItem = serde_json::from_value(serde_json::json!({
        "_id": "65f0c0ffee",
        "createdAt": "2025-03-01T12:00:00.000Z",
        "companyName": "Acme Corp",
        "clientName": "Dana",
        "brandDisplayName": "Acme",
        "campaignName": "Spring Launch",
        "clientType": "Agency",
        "industry": "Retail"
    }))
    .expect("full payload should deserialize");

    assert_eq!(item.id, "65f0c0ffee");
    assert_eq!(item.company_name.as_deref(), Some("Acme Corp"));
    assert_eq!(item.campaign_name.as_deref(), Some("Spring Launch"));
    assert_eq!(item.client_type.as_deref(), Some("Agency"));
}

#[test]
fn list_item_tolerates_missing_display_fields() {
    let item: ListItem = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "createdAt": "2025-01-15T08:30:00Z"
    }))
    .expect("sparse payload should deserialize");

    assert_eq!(item.company_name, None);
    assert_eq!(item.client_name, None);
    assert_eq!(item.brand_display_name, None);
    assert_eq!(item.campaign_name, None);
    assert_eq!(item.client_type, None);
    assert_eq!(item.industry, None);
}

#[test]
fn labels_fall_back_to_placeholders() {
    let item: ListItem = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "createdAt": "2025-01-15T08:30:00Z"
    }))
    .expect("sparse payload should deserialize");

    assert_eq!(item.company_label(), "No Company");
    assert_eq!(item.client_label(), "No Client");
    assert_eq!(item.campaign_label(), "No Campaign");
    assert_eq!(item.client_type_label(), "Client Type");
    assert_eq!(item.industry_label(), "Industry");
}

#[test]
fn labels_prefer_present_values() {
    let item: ListItem = serde_json::from_value(serde_json::json!({
        "_id": "a1",
        "createdAt": "2025-01-15T08:30:00Z",
        "clientName": "Dana",
        "industry": "Retail"
    }))
    .expect("payload should deserialize");

    assert_eq!(item.client_label(), "Dana");
    assert_eq!(item.industry_label(), "Retail");
}

#[test]
fn list_item_without_created_at_is_rejected() {
    let result = serde_json::from_value::<ListItem>(serde_json::json!({
        "_id": "a1"
    }));
    assert!(result.is_err());
}
