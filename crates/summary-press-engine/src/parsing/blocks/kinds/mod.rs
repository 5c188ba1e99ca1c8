pub mod block_quote;
pub mod bullet;
pub mod heading;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use bullet::Bullet;
pub use heading::Heading;
pub use paragraph::Paragraph;
