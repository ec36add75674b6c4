use diesel::pg::PgConnection;
use diesel::prelude::*;
use dotenvy::dotenv;
use eyre::{eyre, Result};
use rand::Rng;
use rust_decimal::Decimal;
use secrecy::SecretString;
use std::env;
use travelapp_core::services::auth_service::RegisterService;
use travelapp_primitives::models::entities::listing::{Listing, NewListing};
use travelapp_primitives::models::entities::user::{NewUser, User};
use uuid::Uuid;

const HOST_USERNAME: &str = "host_user";
const HOST_EMAIL: &str = "host@example.com";
const HOST_PASSWORD: &str = "SecurePass123!";

const SAMPLE_LISTINGS: [(&str, &str); 5] = [
    ("Cozy Beach House", "Mombasa"),
    ("Mountain Cabin", "Nairobi"),
    ("City Apartment", "Diani"),
    ("Luxury Villa", "Naivasha"),
    ("Safari Tent", "Lamu"),
];

fn establish_connection() -> Result<PgConnection> {
    let database_url = env::var("DATABASE_URL").map_err(|_| eyre!("DATABASE_URL must be set"))?;
    PgConnection::establish(&database_url)
        .map_err(|e| eyre!("Error connecting to database: {}", e))
}

fn main() -> Result<()> {
    dotenv().ok();
    println!("🌱 Seeding database...");

    let mut conn = establish_connection()?;

    let host_id = seed_host(&mut conn)?;

    let mut rng = rand::thread_rng();
    for (title, location) in SAMPLE_LISTINGS {
        let price = Decimal::from(rng.gen_range(50..=500));
        seed_listing(&mut conn, host_id, title, location, price)?;
    }

    println!("✅ Database seeded successfully!");
    Ok(())
}

fn seed_host(conn: &mut PgConnection) -> Result<Uuid> {
    use travelapp_primitives::schema::users;

    let existing = users::table
        .filter(users::username.eq(HOST_USERNAME))
        .select(User::as_select())
        .first(conn)
        .optional()?;

    if let Some(user) = existing {
        println!("Host {} already exists", HOST_USERNAME);
        return Ok(user.id);
    }

    let hashed = RegisterService::hash_password(&SecretString::from(HOST_PASSWORD))
        .map_err(|e| eyre!("Failed to hash password: {}", e))?;

    let user: User = diesel::insert_into(users::table)
        .values(&NewUser {
            username: HOST_USERNAME,
            email: HOST_EMAIL,
            first_name: None,
            last_name: None,
            password_hash: &hashed,
        })
        .returning(User::as_returning())
        .get_result(conn)?;

    println!("Created host: {}", HOST_EMAIL);
    Ok(user.id)
}

fn seed_listing(
    conn: &mut PgConnection,
    host_id: Uuid,
    title: &str,
    location: &str,
    price: Decimal,
) -> Result<()> {
    use travelapp_primitives::schema::listings;

    let exists = listings::table
        .filter(listings::title.eq(title))
        .select(Listing::as_select())
        .first(conn)
        .optional()?
        .is_some();

    if exists {
        println!("Listing already exists: {}", title);
        return Ok(());
    }

    let description = format!("A beautiful {} in {}", title, location);

    diesel::insert_into(listings::table)
        .values(&NewListing {
            title,
            description: &description,
            price_per_night: price,
            location,
            host_id,
        })
        .execute(conn)?;

    println!("Created listing: {}", title);
    Ok(())
}
