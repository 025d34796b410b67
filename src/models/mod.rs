pub mod bank_account;
pub mod booking;
pub mod cart;
pub mod category;
pub mod error;
pub mod order;
pub mod product;
pub mod user;

pub use bank_account::{BankAccount, CreateBankAccountRequest, UpdateBankAccountRequest};
pub use booking::{
    Booking, BookingResponse, BookingStatus, CreateBookingRequest, UpdateBookingStatusRequest,
};
pub use cart::{
    AddToCartRequest, Cart, CartItem, CartResponse, SetSelectedRequest, UpdateQuantityRequest,
};
pub use category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
pub use error::{ApiError, ErrorResponse};
pub use order::{
    ConfirmPaymentRequest, ConfirmPaymentResponse, CreateOrderRequest, CreateOrderResponse, Order,
    OrderItem, OrderListQuery, OrderStatus, PaymentDetails, PaymentStatus, ShippingAddress,
    UpdateOrderStatusRequest, UpdatePaymentStatusRequest,
};
pub use product::{
    CreateProductRequest, CreateVariantRequest, Product, ProductDetailResponse, ProductImage,
    ProductQuery, ProductVariant, UpdateProductRequest, UpdateVariantRequest,
};
pub use user::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UpdateUserRequest, User,
    UserProfile, UserRole,
};
