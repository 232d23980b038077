//! Seed binary: drop and recreate the schema, then load the sample catalog.
//! Bob Williams deliberately has no bio so the fallback path stays exercised.

use chrono::NaiveDate;
use eventwise::service::AdminStore;
use eventwise::{connect, store, ServerConfig};
use tracing_subscriber::EnvFilter;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid seed timestamp")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("seed=info".parse()?))
        .init();

    let config = ServerConfig::from_env();
    let pool = connect(&config.database_url).await?;

    tracing::info!("clearing existing data");
    store::reset(&pool).await?;

    tracing::info!("creating events");
    let summit = AdminStore::create_event(&pool, "Tech Summit 2024", "San Francisco, CA").await?;
    let devconf = AdminStore::create_event(&pool, "Developer Conference", "Austin, TX").await?;
    let symposium = AdminStore::create_event(&pool, "AI Symposium", "New York, NY").await?;

    tracing::info!("creating speakers");
    let jane = AdminStore::create_speaker(&pool, "Dr. Jane Smith").await?;
    let john = AdminStore::create_speaker(&pool, "John Doe").await?;
    let alice = AdminStore::create_speaker(&pool, "Alice Johnson").await?;
    let bob = AdminStore::create_speaker(&pool, "Bob Williams").await?;

    tracing::info!("creating bios");
    AdminStore::create_bio(
        &pool,
        jane.id,
        "Dr. Jane Smith is a renowned AI researcher with 15 years of experience in machine learning.",
    )
    .await?;
    AdminStore::create_bio(
        &pool,
        john.id,
        "John Doe is a full-stack developer and tech entrepreneur.",
    )
    .await?;
    AdminStore::create_bio(
        &pool,
        alice.id,
        "Alice Johnson specializes in cloud architecture and DevOps practices.",
    )
    .await?;
    // Bob Williams has no bio.

    tracing::info!("creating sessions");
    let ml_intro = AdminStore::create_session(
        &pool,
        "Introduction to Machine Learning",
        at(2024, 6, 15, 9, 0),
        summit.id,
    )
    .await?;
    let neural = AdminStore::create_session(
        &pool,
        "Advanced Neural Networks",
        at(2024, 6, 15, 14, 0),
        summit.id,
    )
    .await?;
    let webapps = AdminStore::create_session(
        &pool,
        "Building Scalable Web Apps",
        at(2024, 7, 20, 10, 0),
        devconf.id,
    )
    .await?;
    let cloud = AdminStore::create_session(
        &pool,
        "Cloud Infrastructure Best Practices",
        at(2024, 7, 20, 15, 30),
        devconf.id,
    )
    .await?;
    let future_ai = AdminStore::create_session(
        &pool,
        "The Future of AI",
        at(2024, 8, 10, 11, 0),
        symposium.id,
    )
    .await?;

    tracing::info!("associating speakers with sessions");
    AdminStore::assign_speaker(&pool, ml_intro.id, jane.id).await?;
    AdminStore::assign_speaker(&pool, ml_intro.id, john.id).await?;
    AdminStore::assign_speaker(&pool, neural.id, jane.id).await?;
    AdminStore::assign_speaker(&pool, webapps.id, john.id).await?;
    AdminStore::assign_speaker(&pool, webapps.id, alice.id).await?;
    AdminStore::assign_speaker(&pool, cloud.id, alice.id).await?;
    AdminStore::assign_speaker(&pool, future_ai.id, jane.id).await?;
    AdminStore::assign_speaker(&pool, future_ai.id, bob.id).await?;

    tracing::info!("database seeded: 3 events, 5 sessions, 4 speakers, 3 bios");
    Ok(())
}
