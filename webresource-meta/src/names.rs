//! Type and collection naming.

/// The simple name of a Rust type: module path and generic arguments removed.
///
/// # Examples
///
/// ```
/// use webresource_meta::simple_type_name;
///
/// struct Person;
///
/// assert_eq!(simple_type_name::<Person>(), "Person");
/// assert_eq!(simple_type_name::<Vec<String>>(), "Vec");
/// ```
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    strip_path(std::any::type_name::<T>())
}

fn strip_path(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// The collection name of a type: lowercased, with a plain `s` appended.
///
/// This names resource collections in link paths, css classes and list
/// titles, e.g. `NestedPojo` lives under `nestedpojos/`. No English plural
/// rules apply, so `Address` becomes `addresss`.
///
/// # Examples
///
/// ```
/// use webresource_meta::collection_name;
///
/// assert_eq!(collection_name("Pojo"), "pojos");
/// assert_eq!(collection_name("Category"), "categorys");
/// assert_eq!(collection_name("PojoWithRootPathCss"), "pojowithrootpathcsss");
/// ```
pub fn collection_name(type_name: &str) -> String {
    format!("{}s", type_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod model {
        pub struct Address;
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(simple_type_name::<model::Address>(), "Address");
        assert_eq!(simple_type_name::<String>(), "String");
        assert_eq!(simple_type_name::<Option<model::Address>>(), "Option");
        assert_eq!(simple_type_name::<i32>(), "i32");
    }

    #[test]
    fn test_collection_name() {
        assert_eq!(collection_name("LinkNestedPojo"), "linknestedpojos");
        assert_eq!(collection_name("string"), "strings");
    }

    #[test]
    fn test_collection_name_ignores_english_plurals() {
        assert_eq!(collection_name("Address"), "addresss");
        assert_eq!(collection_name("Category"), "categorys");
        assert_eq!(collection_name("Box"), "boxs");
        assert_eq!(collection_name("Day"), "days");
    }
}
