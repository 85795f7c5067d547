// tests/lead_service_unit.rs
use baan_core::application::commands::leads::{
    DeleteLeadCommand, SubmitLeadCommand, UpdateLeadStatusCommand,
};
use baan_core::application::commands::properties::CreatePropertyCommand;
use baan_core::application::error::ApplicationError;
use baan_core::application::queries::leads::ListLeadsQuery;
use baan_core::domain::locale::Locale;

mod support;

fn submission() -> SubmitLeadCommand {
    SubmitLeadCommand {
        name: "  Anna Schmidt  ".into(),
        email: "anna@example.com".into(),
        phone: Some("+49 151 0000000".into()),
        message: "Is the condo still available?".into(),
        locale: Locale::De,
        property_id: None,
    }
}

async fn seed_property(harness: &support::TestHarness, publish: bool) -> i64 {
    harness
        .services
        .property_commands
        .create_property(CreatePropertyCommand {
            title: "Beach Condo".into(),
            description: String::new(),
            property_type: "condo".into(),
            offer: "sale".into(),
            price: 350_000_000,
            bedrooms: 2,
            bathrooms: 2,
            area_sqm: 68,
            location: "Wongamat".into(),
            features: None,
            publish,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn submission_is_stored_as_new_with_trimmed_name() {
    let harness = support::harness();
    let lead = harness
        .services
        .lead_commands
        .submit_lead(submission())
        .await
        .unwrap();

    assert_eq!(lead.status, "new");
    assert_eq!(lead.name, "Anna Schmidt");
    assert_eq!(lead.locale, Locale::De);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let harness = support::harness();
    let mut command = submission();
    command.email = "not-an-address".into();

    let err = harness
        .services
        .lead_commands
        .submit_lead(command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let harness = support::harness();
    let mut command = submission();
    command.message = "   ".into();

    let err = harness
        .services
        .lead_commands
        .submit_lead(command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn unknown_property_reference_is_rejected() {
    let harness = support::harness();
    let mut command = submission();
    command.property_id = Some(42);

    let err = harness
        .services
        .lead_commands
        .submit_lead(command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn draft_property_reference_is_rejected() {
    let harness = support::harness();
    let draft_id = seed_property(&harness, false).await;

    let mut command = submission();
    command.property_id = Some(draft_id);

    let err = harness
        .services
        .lead_commands
        .submit_lead(command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn published_property_reference_is_kept() {
    let harness = support::harness();
    let property_id = seed_property(&harness, true).await;

    let mut command = submission();
    command.property_id = Some(property_id);

    let lead = harness
        .services
        .lead_commands
        .submit_lead(command)
        .await
        .unwrap();
    assert_eq!(lead.property_id, Some(property_id));
}

#[tokio::test]
async fn status_updates_and_filtered_listing() {
    let harness = support::harness();
    let leads = &harness.services.lead_commands;

    let first = leads.submit_lead(submission()).await.unwrap();
    let _second = leads.submit_lead(submission()).await.unwrap();

    let contacted = leads
        .update_lead_status(UpdateLeadStatusCommand {
            id: first.id,
            status: "contacted".into(),
        })
        .await
        .unwrap();
    assert_eq!(contacted.status, "contacted");

    let page = harness
        .services
        .lead_queries
        .list_leads(ListLeadsQuery {
            status: Some("new".into()),
            limit: 0,
            cursor: None,
        })
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);

    let err = leads
        .update_lead_status(UpdateLeadStatusCommand {
            id: first.id,
            status: "spam".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn deleted_leads_disappear_from_the_inbox() {
    let harness = support::harness();
    let lead = harness
        .services
        .lead_commands
        .submit_lead(submission())
        .await
        .unwrap();

    harness
        .services
        .lead_commands
        .delete_lead(DeleteLeadCommand { id: lead.id })
        .await
        .unwrap();

    let page = harness
        .services
        .lead_queries
        .list_leads(ListLeadsQuery {
            status: None,
            limit: 0,
            cursor: None,
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());

    let err = harness
        .services
        .lead_commands
        .delete_lead(DeleteLeadCommand { id: lead.id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
