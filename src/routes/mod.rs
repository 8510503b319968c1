pub mod valuation_routes;
