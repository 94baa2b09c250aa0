pub mod a025_product_sku;
