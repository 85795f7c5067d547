// tests/project_service_unit.rs
use baan_core::application::commands::projects::{
    CreateProjectCommand, DeleteProjectCommand, UpdateProjectCommand,
};
use baan_core::application::error::ApplicationError;
use baan_core::application::queries::projects::{GetProjectBySlugQuery, ListProjectsQuery};

mod support;

fn create_command(name: &str) -> CreateProjectCommand {
    CreateProjectCommand {
        name: name.into(),
        description: "A new beachfront development".into(),
        location: "Jomtien".into(),
        developer: "Horizon Estates".into(),
        completion_year: Some(2027),
        publish: false,
    }
}

#[tokio::test]
async fn create_slugs_the_name_and_suffixes_duplicates() {
    let harness = support::harness();
    let commands = &harness.services.project_commands;

    let first = commands
        .create_project(create_command("Ocean Horizon"))
        .await
        .unwrap();
    let second = commands
        .create_project(create_command("Ocean Horizon"))
        .await
        .unwrap();

    assert_eq!(first.slug, "ocean-horizon");
    assert_eq!(second.slug, "ocean-horizon-2");
}

#[tokio::test]
async fn renaming_to_the_same_name_keeps_the_slug() {
    let harness = support::harness();
    let created = harness
        .services
        .project_commands
        .create_project(create_command("Ocean Horizon"))
        .await
        .unwrap();

    let updated = harness
        .services
        .project_commands
        .update_project(UpdateProjectCommand {
            id: created.id,
            name: Some("Ocean Horizon".into()),
            description: None,
            location: None,
            developer: None,
            completion_year: None,
            publish: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "ocean-horizon");
}

#[tokio::test]
async fn drafts_are_hidden_until_published() {
    let harness = support::harness();
    let created = harness
        .services
        .project_commands
        .create_project(create_command("Ocean Horizon"))
        .await
        .unwrap();

    let public = harness
        .services
        .project_queries
        .list_projects(ListProjectsQuery {
            include_drafts: false,
            limit: 0,
            cursor: None,
        })
        .await
        .unwrap();
    assert!(public.items.is_empty());

    harness
        .services
        .project_commands
        .update_project(UpdateProjectCommand {
            id: created.id,
            name: None,
            description: None,
            location: None,
            developer: None,
            completion_year: None,
            publish: Some(true),
        })
        .await
        .unwrap();

    let public = harness
        .services
        .project_queries
        .list_projects(ListProjectsQuery {
            include_drafts: false,
            limit: 0,
            cursor: None,
        })
        .await
        .unwrap();
    assert_eq!(public.items.len(), 1);

    let fetched = harness
        .services
        .project_queries
        .get_project_by_slug(GetProjectBySlugQuery {
            slug: "ocean-horizon".into(),
            include_drafts: false,
        })
        .await
        .unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn clearing_the_completion_year() {
    let harness = support::harness();
    let created = harness
        .services
        .project_commands
        .create_project(create_command("Ocean Horizon"))
        .await
        .unwrap();
    assert_eq!(created.completion_year, Some(2027));

    let updated = harness
        .services
        .project_commands
        .update_project(UpdateProjectCommand {
            id: created.id,
            name: None,
            description: None,
            location: None,
            developer: None,
            completion_year: Some(None),
            publish: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.completion_year, None);
}

#[tokio::test]
async fn deleting_a_missing_project_is_not_found() {
    let harness = support::harness();
    let err = harness
        .services
        .project_commands
        .delete_project(DeleteProjectCommand { id: 5 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
