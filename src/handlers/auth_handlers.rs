use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use mongodb::bson::oid::ObjectId;

use crate::models::error::ApiError;
use crate::models::user::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, User, UserProfile, UserRole,
};
use crate::services::{AuthService, MongoDBService};

fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::ValidationError("Name is required".to_string()));
    }
    if !request.email.contains('@') {
        return Err(ApiError::ValidationError("Email is not valid".to_string()));
    }
    if request.password.len() < 8 {
        return Err(ApiError::ValidationError(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

pub async fn register(
    request: web::Json<RegisterRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    validate_registration(&request)?;

    let password_hash = auth.hash_password(&request.password)?;
    let user = User::new(
        request.email.trim().to_lowercase(),
        password_hash,
        request.name.trim().to_string(),
        request.phone.clone(),
        UserRole::Customer,
    );

    let created = db.create_user(user).await?;
    info!("Registered user {}", created.email);

    let token = auth.issue_token(&created)?;
    Ok(HttpResponse::Created().json(AuthResponse {
        token,
        user: UserProfile::from(&created),
    }))
}

pub async fn login(
    request: web::Json<LoginRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let email = request.email.trim().to_lowercase();

    let user = db
        .get_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    if !auth.verify_password(&user.password_hash, &request.password)? {
        return Err(ApiError::Unauthorized("Invalid email or password".to_string()));
    }

    info!("User {} logged in", user.email);
    let token = auth.issue_token(&user)?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserProfile::from(&user),
    }))
}

pub async fn me(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

    let user = db
        .get_user_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserProfile::from(&user)))
}

pub async fn update_me(
    req: HttpRequest,
    request: web::Json<UpdateProfileRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let id = ObjectId::parse_str(&claims.sub)
        .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

    let password_hash = match &request.password {
        Some(password) => {
            if password.len() < 8 {
                return Err(ApiError::ValidationError(
                    "Password must be at least 8 characters".to_string(),
                ));
            }
            Some(auth.hash_password(password)?)
        }
        None => None,
    };

    let updated = db
        .update_user_profile(&id, request.name.clone(), request.phone.clone(), password_hash)
        .await?;

    info!("User {} updated their profile", updated.email);
    Ok(HttpResponse::Ok().json(UserProfile::from(&updated)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(email: &str, password: &str, name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration(&registration("ayu@example.com", "rahasia123", "Ayu")).is_ok());
        assert!(validate_registration(&registration("not-an-email", "rahasia123", "Ayu")).is_err());
        assert!(validate_registration(&registration("ayu@example.com", "short", "Ayu")).is_err());
        assert!(validate_registration(&registration("ayu@example.com", "rahasia123", " ")).is_err());
    }
}
