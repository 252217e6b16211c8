// Column names shared by the record frame and the rendered tables
pub const PRODUCT_ID: &str = "Product ID";
pub const PRODUCT: &str = "Product Name";
pub const BRAND: &str = "Brand";
pub const LOCATION: &str = "Location";
pub const SALES_CHANNEL: &str = "Sales Channel";
pub const STORAGE: &str = "Storage Condition";
pub const DATE: &str = "Date";
pub const YEAR: &str = "Year";
pub const MONTH: &str = "Month";
pub const MONTH_NAME: &str = "Month Name";
pub const PRICE: &str = "Price per Unit";
pub const QUANTITY_SOLD: &str = "Quantity Sold (liters/kg)";
pub const QUANTITY_IN_STOCK: &str = "Quantity in Stock (liters/kg)";
pub const MIN_THRESHOLD: &str = "Minimum Stock Threshold (liters/kg)";
pub const REORDER: &str = "Reorder Quantity (liters/kg)";
pub const SHELF_LIFE: &str = "Shelf Life (days)";
pub const REVENUE: &str = "Approx. Total Revenue(INR)";
