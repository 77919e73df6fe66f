//! Store operations for categories.

use crate::{
    Error, Name, Store,
    category::{Category, CategoryId},
};

/// Create a category and return it with its generated ID.
pub fn create_category(name: Name, store: &mut Store) -> Category {
    store.categories.insert_with(|id| Category { id, name })
}

/// Retrieve a single category by ID.
pub fn get_category(category_id: CategoryId, store: &Store) -> Result<Category, Error> {
    store
        .categories
        .get(category_id)
        .cloned()
        .ok_or(Error::NotFound)
}

/// Retrieve all categories ordered by ID.
pub fn get_all_categories(store: &Store) -> Vec<Category> {
    store.categories.rows().cloned().collect()
}

/// Delete a category by ID. Returns an error if the category doesn't exist.
///
/// Records in the category are left untouched.
pub fn delete_category(category_id: CategoryId, store: &mut Store) -> Result<(), Error> {
    if store.categories.remove(category_id) {
        Ok(())
    } else {
        Err(Error::DeleteMissingCategory)
    }
}

#[cfg(test)]
mod category_store_tests {
    use crate::{
        Error, Name, Store,
        category::{Category, create_category, delete_category, get_all_categories, get_category},
        user::create_user,
    };

    #[test]
    fn create_category_succeeds() {
        let mut store = Store::new();
        let name = Name::new_unchecked("Food");

        let category = create_category(name.clone(), &mut store);

        assert_eq!(category, Category { id: 1, name });
        assert_eq!(get_category(1, &store), Ok(category));
    }

    #[test]
    fn id_sequence_is_independent_of_users() {
        let mut store = Store::new();
        create_user(Name::new_unchecked("Alice"), &mut store);
        create_user(Name::new_unchecked("Bob"), &mut store);

        let category = create_category(Name::new_unchecked("Food"), &mut store);

        assert_eq!(category.id, 1);
    }

    #[test]
    fn get_all_categories_returns_every_category() {
        let mut store = Store::new();
        let food = create_category(Name::new_unchecked("Food"), &mut store);
        let rent = create_category(Name::new_unchecked("Rent"), &mut store);

        let categories = get_all_categories(&store);

        assert_eq!(categories.len(), 2);
        assert!(categories.contains(&food));
        assert!(categories.contains(&rent));
    }

    #[test]
    fn delete_category_succeeds() {
        let mut store = Store::new();
        let category = create_category(Name::new_unchecked("Food"), &mut store);

        assert_eq!(delete_category(category.id, &mut store), Ok(()));
        assert_eq!(get_category(category.id, &store), Err(Error::NotFound));

        let next = create_category(Name::new_unchecked("Food"), &mut store);
        assert_eq!(next.id, 2);
    }

    #[test]
    fn delete_missing_category_fails() {
        let mut store = Store::new();

        assert_eq!(
            delete_category(1, &mut store),
            Err(Error::DeleteMissingCategory)
        );
    }
}
