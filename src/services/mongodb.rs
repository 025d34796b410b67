use mongodb::{Client, Collection};
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, FindOptions, IndexOptions, ReplaceOptions, ReturnDocument, ServerApi, ServerApiVersion};
use mongodb::IndexModel;
use futures_util::TryStreamExt;

use crate::models::bank_account::{BankAccount, UpdateBankAccountRequest};
use crate::models::booking::{Booking, BookingStatus};
use crate::models::cart::Cart;
use crate::models::category::{Category, UpdateCategoryRequest};
use crate::models::error::ApiError;
use crate::models::order::{Order, OrderStatus, PaymentDetails, PaymentStatus};
use crate::models::product::{Product, ProductVariant, UpdateProductRequest, UpdateVariantRequest};
use crate::models::user::{User, UpdateUserRequest};

#[derive(Clone)]
pub struct MongoDBService {
    users: Collection<User>,
    products: Collection<Product>,
    product_variants: Collection<ProductVariant>,
    categories: Collection<Category>,
    bookings: Collection<Booking>,
    orders: Collection<Order>,
    carts: Collection<Cart>,
    bank_accounts: Collection<BankAccount>,
}

impl MongoDBService {
    pub async fn init(uri: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        let server_api = ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build();
        client_options.server_api = Some(server_api);

        client_options.connect_timeout = Some(std::time::Duration::from_secs(10));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Test connection
        client
            .database("admin")
            .run_command(doc! {"ping": 1}, None)
            .await?;

        log::info!("Successfully connected to MongoDB");

        let db = client.database("atelier");
        let users = db.collection("users");
        let products = db.collection("products");
        let product_variants = db.collection::<ProductVariant>("product_variants");
        let categories = db.collection::<Category>("categories");
        let bookings = db.collection::<Booking>("bookings");
        let orders = db.collection::<Order>("orders");
        let carts = db.collection::<Cart>("carts");
        let bank_accounts = db.collection::<BankAccount>("bank_accounts");

        let unique = IndexOptions::builder().unique(true).build();

        let email_model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(unique.clone())
            .build();
        users.create_index(email_model, None).await?;

        let product_slug_model = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(unique.clone())
            .build();
        products.create_index(product_slug_model, None).await?;

        let category_slug_model = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(unique.clone())
            .build();
        categories.create_index(category_slug_model, None).await?;

        let order_number_model = IndexModel::builder()
            .keys(doc! { "order_number": 1 })
            .options(unique.clone())
            .build();
        orders.create_index(order_number_model, None).await?;

        // One cart document per user
        let cart_user_model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(unique)
            .build();
        carts.create_index(cart_user_model, None).await?;

        let variant_product_model = IndexModel::builder()
            .keys(doc! { "product_id": 1 })
            .build();
        product_variants.create_index(variant_product_model, None).await?;

        // Storefront listing hits available products sorted by recency
        let listing_model = IndexModel::builder()
            .keys(doc! { "available": 1, "created_at": -1 })
            .build();
        products.create_index(listing_model, None).await?;

        let order_user_model = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build();
        orders.create_index(order_user_model, None).await?;

        Ok(Self {
            users,
            products,
            product_variants,
            categories,
            bookings,
            orders,
            carts,
            bank_accounts,
        })
    }

    // User methods

    pub async fn create_user(&self, user: User) -> Result<User, ApiError> {
        if user.email.trim().is_empty() {
            return Err(ApiError::ValidationError("Email cannot be empty".to_string()));
        }
        if user.name.trim().is_empty() {
            return Err(ApiError::ValidationError("Name cannot be empty".to_string()));
        }

        if self
            .users
            .find_one(doc! { "email": &user.email }, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .is_some()
        {
            return Err(ApiError::DuplicateError(format!(
                "User with email {} already exists",
                user.email
            )));
        }

        let result = self
            .users
            .insert_one(user.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = user;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        self.users
            .find_one(doc! { "email": email }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_user_by_id(&self, id: &ObjectId) -> Result<Option<User>, ApiError> {
        self.users
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.users
            .find(None, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_user(&self, id: &ObjectId, update: UpdateUserRequest) -> Result<User, ApiError> {
        let mut update_doc = doc! {};
        if let Some(name) = update.name {
            update_doc.insert("name", name);
        }
        if let Some(phone) = update.phone {
            update_doc.insert("phone", phone);
        }
        if let Some(role) = update.role {
            update_doc.insert(
                "role",
                bson::to_bson(&role)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize role: {}", e)))?,
            );
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.users
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id.to_hex())))
    }

    pub async fn update_user_profile(
        &self,
        id: &ObjectId,
        name: Option<String>,
        phone: Option<String>,
        password_hash: Option<String>,
    ) -> Result<User, ApiError> {
        let mut update_doc = doc! {};
        if let Some(name) = name {
            update_doc.insert("name", name);
        }
        if let Some(phone) = phone {
            update_doc.insert("phone", phone);
        }
        if let Some(hash) = password_hash {
            update_doc.insert("password_hash", hash);
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.users
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", id.to_hex())))
    }

    pub async fn delete_user(&self, id: &ObjectId) -> Result<bool, ApiError> {
        let result = self
            .users
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(result.deleted_count > 0)
    }

    // Product methods

    pub async fn create_product(&self, product: Product) -> Result<Product, ApiError> {
        if self
            .products
            .find_one(doc! { "slug": &product.slug }, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .is_some()
        {
            return Err(ApiError::DuplicateError(format!(
                "Product with slug {} already exists",
                product.slug
            )));
        }

        let result = self
            .products
            .insert_one(product.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = product;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    /// Storefront view, only available products.
    pub async fn get_available_products(&self) -> Result<Vec<Product>, ApiError> {
        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        self.products
            .find(doc! { "available": true }, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    /// Admin view, every product regardless of availability.
    pub async fn get_all_products(&self) -> Result<Vec<Product>, ApiError> {
        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        self.products
            .find(None, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ApiError> {
        self.products
            .find_one(doc! { "slug": slug }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_product_by_id(&self, id: &ObjectId) -> Result<Option<Product>, ApiError> {
        self.products
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_product(&self, id: &ObjectId, update: UpdateProductRequest) -> Result<Product, ApiError> {
        let mut update_doc = doc! {};
        if let Some(name) = update.name {
            update_doc.insert("name", name);
        }
        if let Some(slug) = update.slug {
            update_doc.insert("slug", slug);
        }
        if let Some(description) = update.description {
            update_doc.insert("description", description);
        }
        if let Some(base_price) = update.base_price {
            update_doc.insert("base_price", base_price);
        }
        if let Some(stock) = update.stock {
            update_doc.insert("stock", stock);
        }
        if let Some(category_ids) = update.category_ids {
            update_doc.insert("category_ids", category_ids);
        }
        if let Some(images) = update.images {
            update_doc.insert(
                "images",
                bson::to_bson(&images)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize images: {}", e)))?,
            );
        }
        if let Some(featured) = update.featured {
            update_doc.insert("featured", featured);
        }
        if let Some(available) = update.available {
            update_doc.insert("available", available);
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.products
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", id.to_hex())))
    }

    /// Removes the product and its variant documents so no orphans remain.
    pub async fn delete_product(&self, id: &ObjectId) -> Result<bool, ApiError> {
        let result = self
            .products
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        self.product_variants
            .delete_many(doc! { "product_id": id.to_hex() }, None)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(true)
    }

    // Variant methods

    pub async fn create_variant(&self, variant: ProductVariant) -> Result<ProductVariant, ApiError> {
        let result = self
            .product_variants
            .insert_one(variant.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = variant;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_variants_for_product(&self, product_id: &str) -> Result<Vec<ProductVariant>, ApiError> {
        self.product_variants
            .find(doc! { "product_id": product_id }, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_variant_by_id(&self, id: &ObjectId) -> Result<Option<ProductVariant>, ApiError> {
        self.product_variants
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_variant(&self, id: &ObjectId, update: UpdateVariantRequest) -> Result<ProductVariant, ApiError> {
        let mut update_doc = doc! {};
        if let Some(size) = update.size {
            update_doc.insert("size", size);
        }
        if let Some(color) = update.color {
            update_doc.insert("color", color);
        }
        if let Some(price) = update.price {
            update_doc.insert("price", price);
        }
        if let Some(stock) = update.stock {
            update_doc.insert("stock", stock);
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.product_variants
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Variant {} not found", id.to_hex())))
    }

    pub async fn delete_variant(&self, id: &ObjectId) -> Result<bool, ApiError> {
        let result = self
            .product_variants
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(result.deleted_count > 0)
    }

    // Category methods

    pub async fn create_category(&self, category: Category) -> Result<Category, ApiError> {
        if self
            .categories
            .find_one(doc! { "slug": &category.slug }, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .is_some()
        {
            return Err(ApiError::DuplicateError(format!(
                "Category with slug {} already exists",
                category.slug
            )));
        }

        let result = self
            .categories
            .insert_one(category.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = category;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_all_categories(&self) -> Result<Vec<Category>, ApiError> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        self.categories
            .find(None, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_category(&self, id: &ObjectId, update: UpdateCategoryRequest) -> Result<Category, ApiError> {
        let mut update_doc = doc! {};
        if let Some(name) = update.name {
            update_doc.insert("name", name);
        }
        if let Some(slug) = update.slug {
            update_doc.insert("slug", slug);
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.categories
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Category {} not found", id.to_hex())))
    }

    pub async fn delete_category(&self, id: &ObjectId) -> Result<bool, ApiError> {
        let result = self
            .categories
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(result.deleted_count > 0)
    }

    // Booking methods

    pub async fn create_booking(&self, booking: Booking) -> Result<Booking, ApiError> {
        let result = self
            .bookings
            .insert_one(booking.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = booking;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_all_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        self.bookings
            .find(None, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_booking_by_id(&self, id: &ObjectId) -> Result<Option<Booking>, ApiError> {
        self.bookings
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    /// Direct field write, no transition table. The admin form offers the
    /// whole enum and whatever it sends is stored.
    pub async fn update_booking_status(&self, id: &ObjectId, status: BookingStatus) -> Result<Booking, ApiError> {
        let update = doc! {
            "$set": {
                "status": bson::to_bson(&status)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize status: {}", e)))?,
                "updated_at": chrono::Utc::now(),
            }
        };

        self.bookings
            .find_one_and_update(
                doc! { "_id": id },
                update,
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id.to_hex())))
    }

    // Order methods

    pub async fn create_order(&self, order: Order) -> Result<Order, ApiError> {
        let result = self
            .orders
            .insert_one(order.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = order;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_order_by_number(&self, order_number: &str) -> Result<Option<Order>, ApiError> {
        self.orders
            .find_one(doc! { "order_number": order_number }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_orders_for_user(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        self.orders
            .find(doc! { "user_id": user_id }, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn get_all_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, ApiError> {
        let filter = match status {
            Some(status) => Some(doc! {
                "status": bson::to_bson(&status)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize status: {}", e)))?
            }),
            None => None,
        };

        let options = FindOptions::builder().sort(doc! { "created_at": -1 }).build();
        self.orders
            .find(filter, options)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_order_status(&self, order_number: &str, status: OrderStatus) -> Result<Order, ApiError> {
        let update = doc! {
            "$set": {
                "status": bson::to_bson(&status)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize status: {}", e)))?,
                "updated_at": chrono::Utc::now(),
            }
        };

        self.orders
            .find_one_and_update(
                doc! { "order_number": order_number },
                update,
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", order_number)))
    }

    pub async fn update_payment_status(&self, order_number: &str, payment_status: PaymentStatus) -> Result<Order, ApiError> {
        let update = doc! {
            "$set": {
                "payment_status": bson::to_bson(&payment_status)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize status: {}", e)))?,
                "updated_at": chrono::Utc::now(),
            }
        };

        self.orders
            .find_one_and_update(
                doc! { "order_number": order_number },
                update,
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", order_number)))
    }

    /// Writes the bank-transfer fields and flips the order into
    /// verification_pending in one document update.
    pub async fn attach_payment_details(
        &self,
        order_number: &str,
        details: PaymentDetails,
    ) -> Result<Order, ApiError> {
        let update = doc! {
            "$set": {
                "payment_details": bson::to_bson(&details)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize payment details: {}", e)))?,
                "payment_status": bson::to_bson(&PaymentStatus::VerificationPending)
                    .map_err(|e| ApiError::InternalError(format!("Failed to serialize status: {}", e)))?,
                "updated_at": chrono::Utc::now(),
            }
        };

        self.orders
            .find_one_and_update(
                doc! { "order_number": order_number },
                update,
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", order_number)))
    }

    // Cart methods

    pub async fn get_cart(&self, user_id: &str) -> Result<Option<Cart>, ApiError> {
        self.carts
            .find_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(ApiError::DatabaseError)
    }

    /// Persists the cart wholesale. The in-memory items array at the time of
    /// the call is exactly what lands in the store, last write wins.
    pub async fn save_cart(&self, cart: &Cart) -> Result<(), ApiError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.carts
            .replace_one(doc! { "user_id": &cart.user_id }, cart, options)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(())
    }

    pub async fn delete_cart(&self, user_id: &str) -> Result<(), ApiError> {
        self.carts
            .delete_one(doc! { "user_id": user_id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(())
    }

    // Bank account methods

    pub async fn create_bank_account(&self, account: BankAccount) -> Result<BankAccount, ApiError> {
        let result = self
            .bank_accounts
            .insert_one(account.clone(), None)
            .await
            .map_err(ApiError::DatabaseError)?;

        let mut created = account;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    pub async fn get_all_bank_accounts(&self) -> Result<Vec<BankAccount>, ApiError> {
        self.bank_accounts
            .find(None, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    /// Storefront view for the payment instructions screen.
    pub async fn get_active_bank_accounts(&self) -> Result<Vec<BankAccount>, ApiError> {
        self.bank_accounts
            .find(doc! { "is_active": true }, None)
            .await
            .map_err(ApiError::DatabaseError)?
            .try_collect()
            .await
            .map_err(ApiError::DatabaseError)
    }

    pub async fn update_bank_account(&self, id: &ObjectId, update: UpdateBankAccountRequest) -> Result<BankAccount, ApiError> {
        let mut update_doc = doc! {};
        if let Some(bank_name) = update.bank_name {
            update_doc.insert("bank_name", bank_name);
        }
        if let Some(account_number) = update.account_number {
            update_doc.insert("account_number", account_number);
        }
        if let Some(account_holder) = update.account_holder {
            update_doc.insert("account_holder", account_holder);
        }
        if let Some(is_active) = update.is_active {
            update_doc.insert("is_active", is_active);
        }
        update_doc.insert("updated_at", chrono::Utc::now());

        self.bank_accounts
            .find_one_and_update(
                doc! { "_id": id },
                doc! { "$set": update_doc },
                Some(
                    mongodb::options::FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await
            .map_err(ApiError::DatabaseError)?
            .ok_or_else(|| ApiError::NotFound(format!("Bank account {} not found", id.to_hex())))
    }

    pub async fn delete_bank_account(&self, id: &ObjectId) -> Result<bool, ApiError> {
        let result = self
            .bank_accounts
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(ApiError::DatabaseError)?;
        Ok(result.deleted_count > 0)
    }
}
