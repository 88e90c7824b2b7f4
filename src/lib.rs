//! # Showcase Catalog Core
//!
//! The catalog store behind a "3D model showcase": an ordered, in-memory list
//! of model records tagged by category, with add, delete, category filtering
//! and pagination. Designed to sit under a cross-platform UI (Flutter, web
//! views, native shells) that renders the catalog and forwards user actions.
//!
//! ## Features
//!
//! - **Owned store**: [`CatalogState`] holds the records, the active category
//!   filter and the page cursor in one place
//! - **Pure queries**: [`catalog_query`] filters and pages without mutating
//! - **Forgiving input**: incomplete drafts are skipped, missing images get a
//!   placeholder, deleting an unknown id is a no-op
//! - **FFI surface**: C-compatible functions exchanging JSON strings wrapped in
//!   an [`AppResponse`] envelope
//!
//! Nothing is persisted. A catalog lives exactly as long as its handle.
//!
//! ## Quick Start
//!
//! ```rust
//! use showcase_catalog_core::catalog_config::CatalogConfig;
//! use showcase_catalog_core::catalog_state::CatalogState;
//! use showcase_catalog_core::category::{CategoryFilter, ModelCategory};
//! use showcase_catalog_core::showcase_model::ModelDraft;
//!
//! let mut catalog = CatalogState::init(CatalogConfig::default())?;
//!
//! let mut draft = ModelDraft::new("Laser Gun", ModelCategory::Guns);
//! let id = catalog.add_record(&mut draft).map(|record| record.id);
//! assert!(id.is_some());
//! assert_eq!(draft, ModelDraft::default());
//!
//! catalog.set_category_filter(CategoryFilter::Only(ModelCategory::Guns));
//! assert_eq!(catalog.current_page().records.len(), 1);
//! # Ok::<(), showcase_catalog_core::app_response::AppResponse>(())
//! ```
//!
//! ## FFI Functions
//!
//! - [`create_catalog`] - Initialize a catalog instance
//! - [`push_model`] - Add a record from a draft (alias: [`post_model`])
//! - [`get_by_id`] - Retrieve a record by ID
//! - [`get_all`] - Retrieve all records
//! - [`delete_by_id`] - Delete a record by ID
//! - [`get_filtered`] - Filter the catalog by a category selector
//! - [`set_category_filter`] - Change the active category filter
//! - [`set_page`] - Move the page cursor
//! - [`get_page`] - Render the page under the cursor
//! - [`clear_all_records`] - Drop every record
//! - [`close_catalog`] - Release a catalog instance
//! - [`free_response`] - Release a response string

pub mod app_response;
pub mod catalog_config;
pub mod catalog_query;
pub mod catalog_state;
pub mod category;
pub mod edit_access;
pub mod showcase_model;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};
use serde::Serialize;

pub use crate::app_response::AppResponse;
pub use crate::catalog_state::CatalogState;

use crate::catalog_config::CatalogConfig;
use crate::catalog_query::filter_by_category;
use crate::category::CategoryFilter;
use crate::edit_access::EditAccess;
use crate::showcase_model::{ModelDraft, ModelId};

/// Creates a new catalog instance.
///
/// # Parameters
///
/// * `config_json` - A null-terminated C string holding a [`CatalogConfig`]
///   as JSON, or null for the default configuration
///
/// # Returns
///
/// Returns a pointer to the [`CatalogState`] instance on success, or a null
/// pointer on failure. Release it with [`close_catalog`].
///
/// # Errors
///
/// Returns null pointer if:
/// - The config string contains invalid UTF-8
/// - The config is not valid JSON
/// - The config fails validation (e.g. `page_size` of 0)
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use showcase_catalog_core::{close_catalog, create_catalog};
///
/// let config = CString::new(r#"{"page_size":6,"seed_samples":true}"#).unwrap();
/// let catalog = create_catalog(config.as_ptr());
/// assert!(!catalog.is_null());
/// close_catalog(catalog);
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_catalog(config_json: *const c_char) -> *mut CatalogState {
    let config = if config_json.is_null() {
        CatalogConfig::default()
    } else {
        let json = match unsafe { CStr::from_ptr(config_json).to_str() } {
            Ok(s) => s,
            Err(e) => {
                warn!("Invalid UTF-8 in config parameter: {e}");
                return std::ptr::null_mut();
            }
        };
        match CatalogConfig::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Rejected catalog config: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    match CatalogState::init(config) {
        Ok(state) => {
            info!("Catalog initialized with {} records", state.len());
            Box::into_raw(Box::new(state))
        }
        Err(e) => {
            warn!("Failed to initialize catalog: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Adds a record built from a draft.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog instance
/// * `draft_json` - Null-terminated C string containing the draft as JSON
/// * `can_edit` - Whether the current session may edit the catalog
///
/// # Returns
///
/// A JSON [`AppResponse`]: `Ok` with the created record, `ValidationError`
/// when the draft lacks a name or category (the catalog is left unchanged),
/// or `Forbidden` when `can_edit` is false.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "Laser Gun",
///   "category": "guns",
///   "description": "optional",
///   "image_ref": "optional URL"
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn push_model(
    state: *mut CatalogState,
    draft_json: *const c_char,
    can_edit: bool,
) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return null_state("push_model"),
    };

    if let Err(e) = EditAccess::from(can_edit).require_edit("Adding a model") {
        warn!("Refused add: {e}");
        return response_to_c_string(&e);
    }

    let json_str = match c_ptr_to_string(draft_json, "draft") {
        Ok(json) => json,
        Err(error_ptr) => return error_ptr,
    };

    let mut draft: ModelDraft = match serde_json::from_str(&json_str) {
        Ok(d) => d,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.add_record(&mut draft) {
        Some(record) => {
            info!("Added model {} to category {}", record.id, record.category);
            json_response(record)
        }
        None => {
            let error = AppResponse::ValidationError(
                "Draft needs a name and a category; nothing was added".to_string(),
            );
            response_to_c_string(&error)
        }
    }
}

/// Adds a record (HTTP-style naming).
///
/// Alias for [`push_model`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn post_model(
    state: *mut CatalogState,
    draft_json: *const c_char,
    can_edit: bool,
) -> *const c_char {
    push_model(state, draft_json, can_edit)
}

/// Retrieves a record by its ID.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog instance
/// * `id` - Null-terminated C string containing the record ID
///
/// # Returns
///
/// Returns `Ok` with the record JSON, or `NotFound` when no record has that
/// ID (including IDs that are not UUIDs at all).
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use showcase_catalog_core::{create_catalog, get_by_id};
///
/// let catalog = create_catalog(std::ptr::null());
/// let id = CString::new("6f1c2b0e-0000-4000-8000-000000000000").unwrap();
/// let result = get_by_id(catalog, id.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_by_id(state: *mut CatalogState, id: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return null_state("get_by_id"),
    };

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    match ModelId::parse(&id_str).and_then(|id| state.get_by_id(&id)) {
        Some(record) => json_response(record),
        None => {
            let error = AppResponse::NotFound(format!("No model found with id: {id_str}"));
            response_to_c_string(&error)
        }
    }
}

/// Retrieves all records.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog instance
///
/// # Returns
///
/// Returns `Ok` with a JSON array of every record in insertion order. The
/// active category filter and page cursor are ignored.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use showcase_catalog_core::{create_catalog, get_all};
///
/// let config = CString::new(r#"{"seed_samples":true}"#).unwrap();
/// let catalog = create_catalog(config.as_ptr());
/// let all_records = get_all(catalog);
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all(state: *mut CatalogState) -> *const c_char {
    match unsafe { state.as_ref() } {
        Some(state) => json_response(state.records()),
        None => null_state("get_all"),
    }
}

/// Deletes a record by its ID.
///
/// Deleting an ID that is not in the catalog is a no-op and still answers
/// `Ok`; the message says whether anything was removed. Answers `Forbidden`
/// without touching the catalog when `can_edit` is false.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn delete_by_id(
    state: *mut CatalogState,
    id: *const c_char,
    can_edit: bool,
) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return null_state("delete_by_id"),
    };

    if let Err(e) = EditAccess::from(can_edit).require_edit("Deleting a model") {
        warn!("Refused delete: {e}");
        return response_to_c_string(&e);
    }

    let id_str = match c_ptr_to_string(id, "id") {
        Ok(id) => id,
        Err(error_ptr) => return error_ptr,
    };

    let removed = ModelId::parse(&id_str)
        .map(|id| state.remove_record(&id))
        .unwrap_or(false);

    let message = if removed {
        info!("Deleted model {id_str}");
        "Record deleted successfully".to_string()
    } else {
        format!("No record found with id: {id_str}")
    };
    response_to_c_string(&AppResponse::success(message))
}

/// Filters the catalog by a category selector.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog instance
/// * `selector` - Null-terminated C string, `"all"` or a category tag
///
/// # Returns
///
/// Returns `Ok` with a JSON array of the matching records in insertion
/// order, or `ValidationError` for an unknown tag. The active filter is left
/// as it was.
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use showcase_catalog_core::{create_catalog, get_filtered};
///
/// let catalog = create_catalog(std::ptr::null());
/// let selector = CString::new("wands/staffs").unwrap();
/// let staffs = get_filtered(catalog, selector.as_ptr());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_filtered(state: *mut CatalogState, selector: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return null_state("get_filtered"),
    };

    let filter = match parse_selector(selector) {
        Ok(filter) => filter,
        Err(error_ptr) => return error_ptr,
    };

    json_response(&filter_by_category(state.records(), filter))
}

/// Changes the active category filter and rewinds to page 1.
///
/// Answers `Ok` with the selector now in effect, or `ValidationError` for an
/// unknown tag (the filter is unchanged).
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn set_category_filter(
    state: *mut CatalogState,
    selector: *const c_char,
) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return null_state("set_category_filter"),
    };

    let filter = match parse_selector(selector) {
        Ok(filter) => filter,
        Err(error_ptr) => return error_ptr,
    };

    state.set_category_filter(filter);
    response_to_c_string(&AppResponse::success(filter.as_str()))
}

/// Moves the page cursor.
///
/// # Parameters
///
/// * `state` - Pointer to the catalog instance
/// * `page` - 1-based page number; `0` is treated as `1`
///
/// # Returns
///
/// Returns `Ok` with the page now under the cursor, in the same shape as
/// [`get_page`]. A page past the end is accepted and has no records.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn set_page(state: *mut CatalogState, page: u32) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return null_state("set_page"),
    };

    state.set_page(page as usize);
    json_response(&state.current_page())
}

/// Renders the page under the cursor for the active filter.
///
/// # Returns
///
/// Returns `Ok` with a JSON page view:
///
/// ```json
/// {
///   "page": 1,
///   "page_size": 6,
///   "total_pages": 2,
///   "total_records": 7,
///   "filter": "all",
///   "records": [ /* at most page_size records */ ]
/// }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_page(state: *mut CatalogState) -> *const c_char {
    match unsafe { state.as_ref() } {
        Some(state) => json_response(&state.current_page()),
        None => null_state("get_page"),
    }
}

/// Clears all records from the catalog.
///
/// The catalog stays usable and the page cursor returns to page 1. Answers
/// `Ok` with the number of records removed.
///
/// # Examples
///
/// ```no_run
/// use showcase_catalog_core::{clear_all_records, create_catalog};
///
/// let catalog = create_catalog(std::ptr::null());
/// let result = clear_all_records(catalog);
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn clear_all_records(state: *mut CatalogState) -> *const c_char {
    let state = match unsafe { state.as_mut() } {
        Some(s) => s,
        None => return null_state("clear_all_records"),
    };

    let removed = state.clear_all_records();
    info!("Cleared {removed} records");
    response_to_c_string(&AppResponse::success(format!(
        "Cleared {removed} records"
    )))
}

/// Releases a catalog created by [`create_catalog`].
///
/// The pointer must not be used afterwards. Null is ignored.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_catalog(state: *mut CatalogState) {
    if state.is_null() {
        return;
    }
    let state = unsafe { Box::from_raw(state) };
    info!("Catalog closed with {} records", state.len());
}

/// Releases a string returned by any function of this library.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr as *mut c_char) });
}

fn parse_selector(selector: *const c_char) -> Result<CategoryFilter, *const c_char> {
    let selector = c_ptr_to_string(selector, "selector")?;
    CategoryFilter::parse(&selector).ok_or_else(|| {
        let error = AppResponse::ValidationError(format!("Unknown category: {selector}"));
        response_to_c_string(&error)
    })
}

fn null_state(function: &str) -> *const c_char {
    let error = AppResponse::BadRequest(format!("Null state pointer passed to {function}"));
    response_to_c_string(&error)
}

/// Serializes `value` and wraps it in an `Ok` envelope.
fn json_response<T: Serialize + ?Sized>(value: &T) -> *const c_char {
    let response = match serde_json::to_string(value) {
        Ok(json) => AppResponse::Ok(json),
        Err(e) => AppResponse::from(e),
    };
    response_to_c_string(&response)
}

/// Converts an [`AppResponse`] to a C-compatible string.
///
/// Returns a null pointer if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust String.
///
/// On failure the `Err` carries a ready-to-return `BadRequest` response.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        let error = AppResponse::BadRequest(format!("Null {field_name} pointer"));
        return Err(response_to_c_string(&error));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
