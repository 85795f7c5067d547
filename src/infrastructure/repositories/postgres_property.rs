// src/infrastructure/repositories/postgres_property.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::ListCursor;
use crate::domain::property::{
    NewProperty, Price, Property, PropertyFilter, PropertyId, PropertyReadRepository,
    PropertyTitle, PropertyUpdate, PropertyWriteRepository,
};
use crate::domain::slug::Slug;
use crate::domain::template::FeatureTemplate;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const PROPERTY_COLUMNS: &str = "id, title, slug, description, property_type, offer, price, \
     bedrooms, bathrooms, area_sqm, location, communal_facilities, security, \
     technical_equipment, location_features, published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPropertyWriteRepository {
    pool: PgPool,
}

impl PostgresPropertyWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPropertyReadRepository {
    pool: PgPool,
}

impl PostgresPropertyReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PropertyRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
    property_type: String,
    offer: String,
    price: i64,
    bedrooms: i16,
    bathrooms: i16,
    area_sqm: i32,
    location: String,
    communal_facilities: Vec<String>,
    security: Vec<String>,
    technical_equipment: Vec<String>,
    location_features: Vec<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PropertyRow> for Property {
    type Error = DomainError;

    fn try_from(row: PropertyRow) -> Result<Self, Self::Error> {
        Ok(Property {
            id: PropertyId::new(row.id)?,
            title: PropertyTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            description: row.description,
            property_type: row.property_type.parse()?,
            offer: row.offer.parse()?,
            price: Price::new(row.price)?,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            area_sqm: row.area_sqm,
            location: row.location,
            features: FeatureTemplate {
                communal_facilities: row.communal_facilities,
                security: row.security,
                technical_equipment: row.technical_equipment,
                location_features: row.location_features,
            },
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PropertyWriteRepository for PostgresPropertyWriteRepository {
    async fn insert(&self, property: NewProperty) -> DomainResult<Property> {
        let NewProperty {
            title,
            slug,
            description,
            property_type,
            offer,
            price,
            bedrooms,
            bathrooms,
            area_sqm,
            location,
            features,
            published,
            published_at,
            created_at,
            updated_at,
        } = property;

        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "INSERT INTO properties (title, slug, description, property_type, offer, price, \
             bedrooms, bathrooms, area_sqm, location, communal_facilities, security, \
             technical_equipment, location_features, published, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING {PROPERTY_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(&description)
        .bind(property_type.as_str())
        .bind(offer.as_str())
        .bind(price.satang())
        .bind(bedrooms)
        .bind(bathrooms)
        .bind(area_sqm)
        .bind(&location)
        .bind(&features.communal_facilities)
        .bind(&features.security)
        .bind(&features.technical_equipment)
        .bind(&features.location_features)
        .bind(published)
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Property::try_from(row)
    }

    async fn update(&self, update: PropertyUpdate) -> DomainResult<Property> {
        let PropertyUpdate {
            id,
            title,
            slug,
            description,
            property_type,
            offer,
            price,
            bedrooms,
            bathrooms,
            area_sqm,
            location,
            features,
            publish_state,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE properties SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(property_type) = property_type {
            builder.push(", property_type = ");
            builder.push_bind(property_type.as_str());
        }
        if let Some(offer) = offer {
            builder.push(", offer = ");
            builder.push_bind(offer.as_str());
        }
        if let Some(price) = price {
            builder.push(", price = ");
            builder.push_bind(price.satang());
        }
        if let Some(bedrooms) = bedrooms {
            builder.push(", bedrooms = ");
            builder.push_bind(bedrooms);
        }
        if let Some(bathrooms) = bathrooms {
            builder.push(", bathrooms = ");
            builder.push_bind(bathrooms);
        }
        if let Some(area_sqm) = area_sqm {
            builder.push(", area_sqm = ");
            builder.push_bind(area_sqm);
        }
        if let Some(location) = location {
            builder.push(", location = ");
            builder.push_bind(location);
        }
        if let Some(features) = features {
            builder.push(", communal_facilities = ");
            builder.push_bind(features.communal_facilities);
            builder.push(", security = ");
            builder.push_bind(features.security);
            builder.push(", technical_equipment = ");
            builder.push_bind(features.technical_equipment);
            builder.push(", location_features = ");
            builder.push_bind(features.location_features);
        }
        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(format!(" RETURNING {PROPERTY_COLUMNS}"));

        let maybe_row = builder
            .build_query_as::<PropertyRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::Conflict("property update conflict, please retry".into())
        })?;

        Property::try_from(row)
    }

    async fn delete(&self, id: PropertyId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("property not found".into()));
        }
        Ok(())
    }
}

impl PostgresPropertyReadRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Postgres>,
        filter: &'a PropertyFilter,
        include_drafts: bool,
        cursor: Option<&'a ListCursor>,
    ) {
        // WHERE TRUE keeps every later condition a plain AND.
        builder.push(" WHERE TRUE");

        if !include_drafts {
            builder.push(" AND published = TRUE");
        }
        if let Some(offer) = filter.offer {
            builder.push(" AND offer = ");
            builder.push_bind(offer.as_str());
        }
        if let Some(property_type) = filter.property_type {
            builder.push(" AND property_type = ");
            builder.push_bind(property_type.as_str());
        }
        if let Some(min_price) = filter.min_price {
            builder.push(" AND price >= ");
            builder.push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            builder.push(" AND price <= ");
            builder.push_bind(max_price);
        }
        if let Some(min_bedrooms) = filter.min_bedrooms {
            builder.push(" AND bedrooms >= ");
            builder.push_bind(min_bedrooms);
        }
        if let Some(location) = filter.location.as_deref() {
            builder.push(" AND location ILIKE ");
            builder.push_bind(format!("%{location}%"));
        }
        if let Some(cursor) = cursor {
            builder.push(" AND (created_at, id) < (");
            builder.push_bind(cursor.created_at);
            builder.push(", ");
            builder.push_bind(cursor.id);
            builder.push(")");
        }
    }
}

#[async_trait]
impl PropertyReadRepository for PostgresPropertyReadRepository {
    async fn find_by_id(&self, id: PropertyId) -> DomainResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Property::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Property>> {
        let row = sqlx::query_as::<_, PropertyRow>(&format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Property::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &PropertyFilter,
        include_drafts: bool,
        limit: u32,
        cursor: Option<ListCursor>,
    ) -> DomainResult<(Vec<Property>, Option<ListCursor>)> {
        let limit = limit.clamp(1, 100);
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PROPERTY_COLUMNS} FROM properties"));
        Self::apply_conditions(&mut builder, filter, include_drafts, cursor.as_ref());
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<PropertyRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut properties = rows
            .into_iter()
            .map(Property::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if properties.len() > limit as usize {
            properties.pop();
            if let Some(last) = properties.last() {
                next_cursor = Some(ListCursor::new(last.created_at, last.id.into()));
            }
        }

        Ok((properties, next_cursor))
    }
}
