//! Creates (or promotes) the first admin user. Standalone so it can run
//! against a fresh database before the server has ever started:
//!
//!   cargo run --bin seed-admin -- --email admin@store.test --password secret123 --name "Store Admin"

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use clap::Parser;
use dotenv::dotenv;
use log::info;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use mongodb::bson::Document;
use std::env;

#[derive(Parser, Debug)]
#[command(about = "Seed or promote an admin user")]
struct Args {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    #[arg(long, default_value = "Admin")]
    name: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    if args.password.len() < 8 {
        return Err("Password must be at least 8 characters".into());
    }

    let uri = env::var("MONGODB_URI").map_err(|_| "MONGODB_URI must be set")?;
    let client_options = ClientOptions::parse(&uri).await?;
    let client = Client::with_options(client_options)?;
    let users: Collection<Document> = client.database("atelier").collection("users");

    let email = args.email.trim().to_lowercase();

    if let Some(existing) = users.find_one(doc! { "email": &email }, None).await? {
        if existing.get_str("role") == Ok("admin") {
            info!("User {} is already an admin, nothing to do", email);
            return Ok(());
        }
        users
            .update_one(
                doc! { "email": &email },
                doc! { "$set": { "role": "admin", "updated_at": chrono::Utc::now() } },
                None,
            )
            .await?;
        info!("Promoted existing user {} to admin", email);
        return Ok(());
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(args.password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?
        .to_string();

    let now = chrono::Utc::now();
    users
        .insert_one(
            doc! {
                "email": &email,
                "password_hash": password_hash,
                "name": args.name.trim(),
                "phone": None::<String>,
                "role": "admin",
                "created_at": now,
                "updated_at": now,
            },
            None,
        )
        .await?;

    info!("Created admin user {}", email);
    Ok(())
}
