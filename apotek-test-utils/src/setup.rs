#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        $crate::TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
    }};
}
