use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO products (title, price, category, description, image_url)
            VALUES
                (
                    'Fjallraven Foldsack No. 1 Backpack',
                    109.95,
                    'men''s clothing',
                    'Everyday backpack that fits a 15 inch laptop in the padded sleeve',
                    'https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg'
                ),
                (
                    'Mens Casual Slim Fit T-Shirt',
                    22.3,
                    'men''s clothing',
                    'Slim-fitting style, contrast raglan long sleeve',
                    'https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg'
                ),
                (
                    'Solid Gold Petite Micropave Ring',
                    168.0,
                    'jewelery',
                    'Classic created wedding engagement solitaire ring',
                    'https://fakestoreapi.com/img/61sbMiUnoGL._AC_UL640_QL65_ML3_.jpg'
                ),
                (
                    'White Gold Plated Princess Ring',
                    9.99,
                    'jewelery',
                    'Gift for her, rhodium plated',
                    'https://fakestoreapi.com/img/71YAIFU48IL._AC_UL640_QL65_ML3_.jpg'
                ),
                (
                    'WD 2TB Elements Portable External Hard Drive',
                    64.0,
                    'electronics',
                    'USB 3.0 and USB 2.0 compatibility, fast data transfers',
                    'https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg'
                ),
                (
                    'Acer 21.5 inch Full HD IPS Monitor',
                    599.0,
                    'electronics',
                    '21.5 inch Full HD widescreen IPS display with Radeon FreeSync',
                    'https://fakestoreapi.com/img/81QpkIctqPL._AC_SX679_.jpg'
                ),
                (
                    'Womens 3-in-1 Snowboard Jacket',
                    56.99,
                    'women''s clothing',
                    'Detachable liner, adjustable hood and multiple pockets',
                    'https://fakestoreapi.com/img/51Y5NI-I5jL._AC_UX679_.jpg'
                ),
                (
                    'Womens Short Sleeve Boat Neck V',
                    7.95,
                    'women''s clothing',
                    'Lightweight fabric with great stretch for comfort',
                    'https://fakestoreapi.com/img/71z3kpMAYsL._AC_UY879_.jpg'
                )
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM products
            WHERE title IN (
                'Fjallraven Foldsack No. 1 Backpack',
                'Mens Casual Slim Fit T-Shirt',
                'Solid Gold Petite Micropave Ring',
                'White Gold Plated Princess Ring',
                'WD 2TB Elements Portable External Hard Drive',
                'Acer 21.5 inch Full HD IPS Monitor',
                'Womens 3-in-1 Snowboard Jacket',
                'Womens Short Sleeve Boat Neck V'
            )
            "#,
            )
            .await?;

        Ok(())
    }
}
