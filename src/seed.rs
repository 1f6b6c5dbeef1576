use tracing::info;

use crate::db::{create_document, DocumentStore, Filter};
use crate::errors::ApiError;
use crate::models::{Property, Record, Testimonial};

/// How many demo documents a seeding run inserted per collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub properties: usize,
    pub testimonials: usize,
}

fn demo_properties() -> Vec<Property> {
    vec![
        Property {
            title: "شقة فاخرة بإطلالة بحرية".to_string(),
            city: "طرابلس".to_string(),
            property_type: "شقة".to_string(),
            price: 350.0,
            price_unit: "اليوم".to_string(),
            size: Some(140),
            bedrooms: Some(3),
            bathrooms: Some(2),
            images: vec![
                "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1494526585095-c41746248156?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1501045661006-fcebe0257c3f?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            amenities: vec![
                "إنترنت عالي السرعة".to_string(),
                "موقف خاص".to_string(),
                "تكييف مركزي".to_string(),
            ],
            location_map: Some("https://maps.google.com".to_string()),
            description: Some("شقة حديثة بتجهيزات فاخرة وموقع مميز قرب الكورنيش.".to_string()),
        },
        Property {
            title: "فيلا راقية مع مسبح".to_string(),
            city: "بنغازي".to_string(),
            property_type: "فيلا".to_string(),
            price: 12000.0,
            price_unit: "الشهر".to_string(),
            size: Some(420),
            bedrooms: Some(5),
            bathrooms: Some(4),
            images: vec![
                "https://images.unsplash.com/photo-1505691938895-1758d7feb511?q=80&w=1600&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1536376072261-38c75010e6c9?q=80&w=1600&auto=format&fit=crop".to_string(),
            ],
            amenities: vec![
                "مسبح".to_string(),
                "حديقة واسعة".to_string(),
                "خدمات نظافة".to_string(),
            ],
            location_map: Some("https://maps.google.com".to_string()),
            description: Some("فيلا بمستوى راقٍ تناسب العائلات الكبيرة والإقامات الطويلة.".to_string()),
        },
    ]
}

fn demo_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "أحمد م.".to_string(),
            city: Some("طرابلس".to_string()),
            rating: 5,
            content: "خدمة ممتازة وحجز سريع.".to_string(),
        },
        Testimonial {
            name: "ليلى ع.".to_string(),
            city: Some("بنغازي".to_string()),
            rating: 5,
            content: "عقارات نظيفة وتعامل راقٍ.".to_string(),
        },
    ]
}

/// Inserts `records` only when their collection is empty.
async fn seed_collection<R: Record>(store: &dyn DocumentStore, records: Vec<R>) -> Result<usize, ApiError> {
    let existing = store.count(R::COLLECTION, &Filter::new()).await?;
    if existing > 0 {
        info!("Collection '{}' already holds {} documents, skipping seed", R::COLLECTION, existing);
        return Ok(0);
    }

    for record in &records {
        create_document(store, record).await?;
    }
    info!("Seeded {} demo documents into '{}'", records.len(), R::COLLECTION);
    Ok(records.len())
}

/// Loads the demo properties and testimonials. Safe to call repeatedly.
pub async fn seed_demo_data(store: &dyn DocumentStore) -> Result<SeedReport, ApiError> {
    Ok(SeedReport {
        properties: seed_collection(store, demo_properties()).await?,
        testimonials: seed_collection(store, demo_testimonials()).await?,
    })
}
