// Route table
// (method, exact path) -> endpoint; anything not listed is a 404

use hyper::Method;

/// Every operation the API exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListProducts,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
    AdminLogin,
    EmployeeLogin,
    PlaceOrder,
    ListOrders,
    UpdateOrder,
    Team,
    Testimonials,
}

#[derive(Debug)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub endpoint: Endpoint,
}

const fn route(method: &'static str, path: &'static str, endpoint: Endpoint) -> Route {
    Route {
        method,
        path,
        endpoint,
    }
}

pub const ROUTES: &[Route] = &[
    // Catalog
    route("GET", "/api/products", Endpoint::ListProducts),
    route("GET", "/api/admin/products", Endpoint::ListProducts),
    route("POST", "/api/admin/products", Endpoint::CreateProduct),
    route("PUT", "/api/admin/products", Endpoint::UpdateProduct),
    route("DELETE", "/api/admin/products", Endpoint::DeleteProduct),
    // Auth
    route("POST", "/api/admin/login", Endpoint::AdminLogin),
    route("POST", "/api/employee/login", Endpoint::EmployeeLogin),
    // Orders
    route("POST", "/api/orders", Endpoint::PlaceOrder),
    route("GET", "/api/admin/orders", Endpoint::ListOrders),
    route("PUT", "/api/admin/orders", Endpoint::UpdateOrder),
    // Storefront pages
    route("GET", "/api/team", Endpoint::Team),
    route("GET", "/api/testimonials", Endpoint::Testimonials),
];

/// Find the endpoint for an exact (method, request target) pair
///
/// The target is compared as a whole, so a query string makes it miss.
pub fn lookup(method: &Method, path: &str) -> Option<Endpoint> {
    ROUTES
        .iter()
        .find(|r| r.method == method.as_str() && r.path == path)
        .map(|r| r.endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact_match() {
        assert_eq!(
            lookup(&Method::GET, "/api/products"),
            Some(Endpoint::ListProducts)
        );
        assert_eq!(
            lookup(&Method::GET, "/api/admin/products"),
            Some(Endpoint::ListProducts)
        );
        assert_eq!(
            lookup(&Method::DELETE, "/api/admin/products"),
            Some(Endpoint::DeleteProduct)
        );
        assert_eq!(
            lookup(&Method::PUT, "/api/admin/orders"),
            Some(Endpoint::UpdateOrder)
        );
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(lookup(&Method::POST, "/api/products"), None);
        assert_eq!(lookup(&Method::GET, "/api/products/"), None);
        assert_eq!(lookup(&Method::GET, "/api/product"), None);
        assert_eq!(lookup(&Method::DELETE, "/api/admin/orders"), None);
        assert_eq!(lookup(&Method::GET, "/"), None);
        assert_eq!(lookup(&Method::GET, "/api/products?x=1"), None);
    }

    #[test]
    fn test_no_duplicate_routes() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate route {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }
}
