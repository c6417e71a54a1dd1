mod listings_tests;
mod scrape_tests;
