// API path constants for the MotorMate backend

/// Header carrying JSON-encoded pagination metadata on list responses
pub const PAGINATION_HEADER: &str = "x-pagination";

/// Route the front end is sent to after a 500 response
pub const SERVER_ERROR_ROUTE: &str = "/server-error";

pub mod api_path {
    // Account
    pub const USER_DETAILS: &str = "api/user/details";
    pub const AUTH_LOGIN: &str = "api/auth/login";
    pub const AUTH_LOGIN_GOOGLE: &str = "api/auth/sso/google";
    pub const AUTH_SIGN_UP: &str = "api/auth/sign-up";
    pub const AUTH: &str = "api/auth";

    // Catalog
    pub const BRAND: &str = "api/brand";
    pub const COLLECTION: &str = "api/collection";
    pub const MODEL: &str = "api/model";
    pub const MODEL_BY_COLLECTION: &str = "api/model/collection";
    pub const COLOR: &str = "api/color";
    pub const COLOR_BULK: &str = "api/color/bulk";

    // Vehicle
    pub const VEHICLE: &str = "api/vehicle";
    pub const VEHICLE_BY_STATUS: &str = "api/vehicle/status";
    pub const VEHICLE_OF_USER: &str = "api/vehicle/user";

    // User
    pub const USER: &str = "api/user";
    pub const USER_ROLES: &str = "api/user/role/all";
    pub const USER_ROLE: &str = "api/user/role";

    // Blog
    pub const BLOG: &str = "api/blog";
    pub const BLOG_CATEGORY: &str = "api/blog/category";

    // Orders
    pub const ORDER: &str = "api/order";
    pub const ORDER_PARENT: &str = "api/order/parent";
    pub const ORDER_OF_USER: &str = "api/order/user";
    pub const ORDER_OF_SHOP: &str = "api/order/shop";
    pub const ORDER_REVIEW: &str = "api/order/review";

    // Cart
    pub const CART: &str = "api/cart";

    // Chart
    pub const CHART_TOTAL_VEHICLES: &str = "api/chart/total/vehicles";
    pub const CHART_TOTAL_VIEWS: &str = "api/chart/total/views";
    pub const CHART_TOTAL_USERS: &str = "api/chart/total/users";
    pub const CHART_TOTAL_PROFITS: &str = "api/chart/total/profits";
    pub const CHART_TOP_LESSEES: &str = "api/chart/top/lessees";
    pub const CHART_TOP_LESSORS: &str = "api/chart/top/lessors";
    pub const CHART_REVENUE: &str = "api/chart/revenue";
}
