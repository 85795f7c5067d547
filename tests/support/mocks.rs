// tests/support/mocks.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use baan_core::application::ports::time::Clock;
use baan_core::domain::errors::{DomainError, DomainResult};
use baan_core::domain::lead::{Lead, LeadId, LeadRepository, LeadStatus, NewLead};
use baan_core::domain::pagination::ListCursor;
use baan_core::domain::project::{
    NewProject, Project, ProjectId, ProjectReadRepository, ProjectUpdate, ProjectWriteRepository,
};
use baan_core::domain::property::{
    NewProperty, Property, PropertyFilter, PropertyId, PropertyReadRepository, PropertyUpdate,
    PropertyWriteRepository,
};
use baan_core::domain::slug::{Slug, SlugKind, SlugLookup};
use baan_core::domain::template::{
    NewSavedTemplate, SavedTemplate, TemplateId, TemplateRepository,
};

pub type Store<T> = Arc<Mutex<HashMap<i64, T>>>;

/// Deterministic clock: every call advances one second, so records created
/// in sequence always have distinct, ordered timestamps.
pub struct TickingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl TickingClock {
    pub fn new() -> Self {
        Self {
            base: Utc::now(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

fn paginate<T>(
    mut items: Vec<T>,
    limit: u32,
    key: impl Fn(&T) -> (DateTime<Utc>, i64),
) -> (Vec<T>, Option<ListCursor>) {
    items.sort_by_key(|item| std::cmp::Reverse(key(item)));
    let limit = limit.clamp(1, 100) as usize;

    let mut next_cursor = None;
    if items.len() > limit {
        items.truncate(limit);
        if let Some(last) = items.last() {
            let (created_at, id) = key(last);
            next_cursor = Some(ListCursor::new(created_at, id));
        }
    }
    (items, next_cursor)
}

fn after_cursor(created_at: DateTime<Utc>, id: i64, cursor: Option<&ListCursor>) -> bool {
    match cursor {
        Some(cursor) => (created_at, id) < (cursor.created_at, cursor.id),
        None => true,
    }
}

/* -------------------------------- properties -------------------------------- */

pub struct InMemoryProperties {
    store: Store<Property>,
    next_id: AtomicI64,
}

impl InMemoryProperties {
    pub fn new() -> Self {
        Self {
            store: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn store(&self) -> Store<Property> {
        Arc::clone(&self.store)
    }

    pub fn get(&self, id: i64) -> Option<Property> {
        self.store.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl PropertyWriteRepository for InMemoryProperties {
    async fn insert(&self, property: NewProperty) -> DomainResult<Property> {
        let mut map = self.store.lock().unwrap();
        if map.values().any(|existing| existing.slug == property.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Property {
            id: PropertyId::new(id).unwrap(),
            title: property.title,
            slug: property.slug,
            description: property.description,
            property_type: property.property_type,
            offer: property.offer,
            price: property.price,
            bedrooms: property.bedrooms,
            bathrooms: property.bathrooms,
            area_sqm: property.area_sqm,
            location: property.location,
            features: property.features,
            published: property.published,
            published_at: property.published_at,
            created_at: property.created_at,
            updated_at: property.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PropertyUpdate) -> DomainResult<Property> {
        let mut map = self.store.lock().unwrap();
        let id = i64::from(update.id);
        let property = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("property not found".into()))?;
        if property.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "property update conflict, please retry".into(),
            ));
        }

        if let Some(title) = update.title {
            property.title = title;
        }
        if let Some(slug) = update.slug {
            property.slug = slug;
        }
        if let Some(description) = update.description {
            property.description = description;
        }
        if let Some(property_type) = update.property_type {
            property.property_type = property_type;
        }
        if let Some(offer) = update.offer {
            property.offer = offer;
        }
        if let Some(price) = update.price {
            property.price = price;
        }
        if let Some(bedrooms) = update.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = update.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(area_sqm) = update.area_sqm {
            property.area_sqm = area_sqm;
        }
        if let Some(location) = update.location {
            property.location = location;
        }
        if let Some(features) = update.features {
            property.features = features;
        }
        if let Some(state) = update.publish_state {
            property.published = state.published;
            property.published_at = state.published_at;
        }
        property.updated_at = update.updated_at;

        Ok(property.clone())
    }

    async fn delete(&self, id: PropertyId) -> DomainResult<()> {
        let mut map = self.store.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("property not found".into()))
    }
}

#[async_trait]
impl PropertyReadRepository for InMemoryProperties {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>> {
        Ok(self.store.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Property>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .find(|property| &property.slug == slug)
            .cloned())
    }

    async fn list_page(
        &self,
        filter: &PropertyFilter,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Property>, Option<ListCursor>)> {
        let map = self.store.lock().unwrap();
        let needle = filter.location.as_deref().map(str::to_lowercase);
        let matching: Vec<Property> = map
            .values()
            .filter(|p| include_drafts || p.published)
            .filter(|p| filter.offer.is_none_or(|offer| p.offer == offer))
            .filter(|p| filter.property_type.is_none_or(|t| p.property_type == t))
            .filter(|p| filter.min_price.is_none_or(|min| p.price.satang() >= min))
            .filter(|p| filter.max_price.is_none_or(|max| p.price.satang() <= max))
            .filter(|p| filter.min_bedrooms.is_none_or(|min| p.bedrooms >= min))
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|needle| p.location.to_lowercase().contains(needle))
            })
            .filter(|p| after_cursor(p.created_at, p.id.into(), cursor.as_ref()))
            .cloned()
            .collect();

        Ok(paginate(matching, limit, |p| (p.created_at, p.id.into())))
    }
}

/* -------------------------------- projects -------------------------------- */

pub struct InMemoryProjects {
    store: Store<Project>,
    next_id: AtomicI64,
}

impl InMemoryProjects {
    pub fn new() -> Self {
        Self {
            store: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn store(&self) -> Store<Project> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl ProjectWriteRepository for InMemoryProjects {
    async fn insert(&self, project: NewProject) -> DomainResult<Project> {
        let mut map = self.store.lock().unwrap();
        if map.values().any(|existing| existing.slug == project.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Project {
            id: ProjectId::new(id).unwrap(),
            name: project.name,
            slug: project.slug,
            description: project.description,
            location: project.location,
            developer: project.developer,
            completion_year: project.completion_year,
            published: project.published,
            created_at: project.created_at,
            updated_at: project.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ProjectUpdate) -> DomainResult<Project> {
        let mut map = self.store.lock().unwrap();
        let id = i64::from(update.id);
        let project = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("project not found".into()))?;
        if project.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "project update conflict, please retry".into(),
            ));
        }

        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(slug) = update.slug {
            project.slug = slug;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(location) = update.location {
            project.location = location;
        }
        if let Some(developer) = update.developer {
            project.developer = developer;
        }
        if let Some(completion_year) = update.completion_year {
            project.completion_year = completion_year;
        }
        if let Some(published) = update.published {
            project.published = published;
        }
        project.updated_at = update.updated_at;

        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId) -> DomainResult<()> {
        let mut map = self.store.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("project not found".into()))
    }
}

#[async_trait]
impl ProjectReadRepository for InMemoryProjects {
    async fn find_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        Ok(self.store.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Project>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .values()
            .find(|project| &project.slug == slug)
            .cloned())
    }

    async fn list_page(
        &self,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Project>, Option<ListCursor>)> {
        let map = self.store.lock().unwrap();
        let matching: Vec<Project> = map
            .values()
            .filter(|p| include_drafts || p.published)
            .filter(|p| after_cursor(p.created_at, p.id.into(), cursor.as_ref()))
            .cloned()
            .collect();

        Ok(paginate(matching, limit, |p| (p.created_at, p.id.into())))
    }
}

/* -------------------------------- slug lookup -------------------------------- */

/// Scans the shared in-memory stores the way the Postgres adapter scans the
/// two slug-bearing tables.
pub struct InMemorySlugLookup {
    properties: Store<Property>,
    projects: Store<Project>,
}

impl InMemorySlugLookup {
    pub fn new(properties: Store<Property>, projects: Store<Project>) -> Self {
        Self {
            properties,
            projects,
        }
    }
}

#[async_trait]
impl SlugLookup for InMemorySlugLookup {
    async fn slug_owner(&self, kind: SlugKind, slug: &Slug) -> DomainResult<Option<i64>> {
        let owner = match kind {
            SlugKind::Property => self
                .properties
                .lock()
                .unwrap()
                .values()
                .find(|p| &p.slug == slug)
                .map(|p| i64::from(p.id)),
            SlugKind::Project => self
                .projects
                .lock()
                .unwrap()
                .values()
                .find(|p| &p.slug == slug)
                .map(|p| i64::from(p.id)),
        };
        Ok(owner)
    }
}

/* -------------------------------- leads -------------------------------- */

pub struct InMemoryLeads {
    store: Store<Lead>,
    next_id: AtomicI64,
}

impl InMemoryLeads {
    pub fn new() -> Self {
        Self {
            store: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn get(&self, id: i64) -> Option<Lead> {
        self.store.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeads {
    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let mut map = self.store.lock().unwrap();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Lead {
            id: LeadId::new(id).unwrap(),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            message: lead.message,
            locale: lead.locale,
            property_id: lead.property_id,
            status: lead.status,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>> {
        Ok(self.store.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(
        &self,
        status: Option<LeadStatus>,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Lead>, Option<ListCursor>)> {
        let map = self.store.lock().unwrap();
        let matching: Vec<Lead> = map
            .values()
            .filter(|lead| status.is_none_or(|status| lead.status == status))
            .filter(|lead| after_cursor(lead.created_at, lead.id.into(), cursor.as_ref()))
            .cloned()
            .collect();

        Ok(paginate(matching, limit, |lead| {
            (lead.created_at, lead.id.into())
        }))
    }

    async fn set_status(
        &self,
        id: LeadId,
        status: LeadStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Lead> {
        let mut map = self.store.lock().unwrap();
        let lead = map
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("lead not found".into()))?;
        lead.status = status;
        lead.updated_at = updated_at;
        Ok(lead.clone())
    }

    async fn delete(&self, id: LeadId) -> DomainResult<()> {
        let mut map = self.store.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("lead not found".into()))
    }
}

/* -------------------------------- templates -------------------------------- */

pub struct InMemoryTemplates {
    store: Store<SavedTemplate>,
    next_id: AtomicI64,
}

impl InMemoryTemplates {
    pub fn new() -> Self {
        Self {
            store: Arc::default(),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplates {
    async fn insert(&self, template: NewSavedTemplate) -> DomainResult<SavedTemplate> {
        let mut map = self.store.lock().unwrap();
        if map
            .values()
            .any(|existing| existing.name.as_str() == template.name.as_str())
        {
            return Err(DomainError::Conflict("template name already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = SavedTemplate {
            id: TemplateId::new(id).unwrap(),
            name: template.name,
            features: template.features,
            created_at: template.created_at,
            updated_at: template.updated_at,
        };
        map.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TemplateId) -> DomainResult<Option<SavedTemplate>> {
        Ok(self.store.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<SavedTemplate>> {
        let map = self.store.lock().unwrap();
        let mut templates: Vec<SavedTemplate> = map.values().cloned().collect();
        templates.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(templates)
    }

    async fn delete(&self, id: TemplateId) -> DomainResult<()> {
        let mut map = self.store.lock().unwrap();
        map.remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("template not found".into()))
    }
}
