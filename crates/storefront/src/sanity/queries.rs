//! GROQ queries, one per content need.
//!
//! Parameters are referenced as `$name` and supplied JSON-encoded by
//! [`SanityClient`](super::SanityClient).

/// Projection shared by every product listing.
macro_rules! product_card_projection {
    () => {
        "{
  _id,
  name,
  slug,
  category->{name, slug},
  price,
  images,
  colors,
  badges,
  shortDescription,
  dateAdded
}"
    };
}

pub const HERO_SECTION: &str = r#"*[_type == "heroSection"][0]{
  title,
  subtitle,
  ctaText,
  ctaLink,
  backgroundVideo,
  backgroundImage,
  posterImage
}"#;

pub const COLLECTIONS: &str = r#"*[_type == "collection" && isActive == true] | order(order asc){
  _id,
  title,
  slug,
  description,
  longDescription,
  image,
  gallery,
  order,
  isActive
}"#;

pub const COLLECTION_BY_SLUG: &str = r#"*[_type == "collection" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  description,
  longDescription,
  image,
  gallery,
  order,
  isActive
}"#;

pub const PRODUCTS: &str = concat!(
    r#"*[_type == "product"] | order(dateAdded desc)"#,
    product_card_projection!()
);

pub const PRODUCT_BY_SLUG: &str = r#"*[_type == "product" && slug.current == $slug][0]{
  _id,
  name,
  slug,
  category->{name, slug},
  price,
  images,
  colors,
  badges,
  shortDescription,
  description,
  craftsmanship,
  styling,
  care,
  dateAdded,
  tags
}"#;

pub const PRODUCT_SLUGS: &str =
    r#"*[_type == "product" && defined(slug.current)] | order(dateAdded desc).slug.current"#;

pub const NEW_ARRIVALS: &str = concat!(
    r#"*[_type == "product" && badges.isNew == true] | order(dateAdded desc)"#,
    product_card_projection!()
);

pub const FEATURED_PRODUCTS: &str = concat!(
    r#"*[_type == "product" && badges.isFeatured == true] | order(dateAdded desc)"#,
    product_card_projection!()
);

pub const PRODUCTS_BY_CATEGORY: &str = concat!(
    r#"*[_type == "product" && category->slug.current == $categorySlug] | order(dateAdded desc)"#,
    product_card_projection!()
);

pub const RELATED_PRODUCTS: &str = concat!(
    r#"*[_type == "product" && category->slug.current == $categorySlug && slug.current != $currentSlug][0..3]"#,
    product_card_projection!()
);

pub const CATEGORIES: &str = r#"*[_type == "category"] | order(name asc){
  _id,
  name,
  slug,
  description
}"#;

pub const STORE_LOCATIONS: &str = r#"*[_type == "storeLocation"] | order(name asc){
  _id,
  name,
  address,
  phone,
  email,
  hours,
  coordinates,
  image
}"#;

pub const ABOUT_PAGE: &str = r#"*[_type == "aboutPage"][0]{
  _id,
  pageTitle,
  pageDescription,
  heroTitle,
  heroSubtitle,
  heroBackgroundImage,
  introHeading,
  introContent,
  contentSections[] | order(order asc) {
    title,
    content,
    image,
    imagePosition,
    order
  },
  valuesHeading,
  valuesDescription,
  values[] | order(order asc) {
    icon,
    title,
    description,
    order
  },
  isPublished
}"#;

pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0]{
  brandName,
  logo,
  logoMinimized,
  tagline,
  contactEmail,
  contactPhone,
  socialLinks,
  seo,
  contactPage{
    heroTitle,
    heroSubtitle,
    heroBackgroundImage,
    sectionHeading,
    sectionIntro,
    contactInfoCards[]{icon, title, lines, order}
  },
  contactForm{
    recipientEmail,
    fields[]{name, label, fieldType, required, placeholder, order},
    successMessage,
    errorMessage
  },
  footerLinks{
    customerCare[]{label, href, order},
    legal[]{label, href, order}
  }
}"#;

pub const INSTAGRAM_POSTS: &str = r#"*[_type == "instagramPost" && isActive == true] | order(order asc){
  _id,
  image,
  caption,
  url,
  order,
  isActive
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_queries_share_projection() {
        for query in [PRODUCTS, NEW_ARRIVALS, FEATURED_PRODUCTS, PRODUCTS_BY_CATEGORY, RELATED_PRODUCTS] {
            assert!(query.contains("category->{name, slug}"), "{query}");
            assert!(query.contains("shortDescription"), "{query}");
        }
    }

    #[test]
    fn test_related_products_takes_four() {
        assert!(RELATED_PRODUCTS.contains("[0..3]"));
        assert!(RELATED_PRODUCTS.contains("slug.current != $currentSlug"));
    }
}
