//! Resource models moved by the typed API functions.
//!
//! These are wire DTOs: camelCase field names, UUID identifiers, UTC
//! timestamps, lowercase status values. Create payloads (`New*`) carry the
//! required fields; update payloads (`*Update`) are sparse, serializing
//! only the fields the caller set.

mod admin_user;
mod blog;
mod business;
mod campaign;
mod card;
mod coupon;
mod customer;
mod product;
mod report;
mod settings;
mod store;
mod subscription;

pub use admin_user::{AdminRole, AdminUser, AdminUserUpdate, NewAdminUser};
pub use blog::{
    BlogCategory, BlogCategoryUpdate, BlogComment, BlogCommentStatus, BlogPost, BlogPostStatus,
    BlogPostUpdate, NewBlogCategory, NewBlogPost,
};
pub use business::{Business, BusinessUpdate, NewBusiness};
pub use campaign::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign};
pub use card::{
    CardInstance, CardInstanceStatus, CardTemplate, CardTemplateUpdate, CardVariant, IssueCard,
    NewCardTemplate,
};
pub use coupon::{Coupon, CouponStatus, CouponUpdate, DiscountKind, NewCoupon};
pub use customer::{Customer, CustomerUpdate};
pub use product::{NewProduct, Product, ProductUpdate};
pub use report::{AnalyticsOverview, ReportRange, SalesReport, SalesReportRow, SubscriptionsReport};
pub use settings::{
    GeneralSettings, GeneralSettingsUpdate, SeoProfile, SeoProfileUpdate, ThemeSettings,
    ThemeSettingsUpdate,
};
pub use store::{NewStore, Store, StoreStatus, StoreUpdate};
pub use subscription::{
    NewSubscriptionPlan, Subscription, SubscriptionPlan, SubscriptionPlanUpdate,
    SubscriptionStatus,
};
