//! Portfolio table: facet dropdowns, the "All" reset and expandable rows.

use crate::constants::{
    ACTIVE_CLASS, ALL_FILTER_SELECTOR, COMPANY_CELL_SELECTOR, DETAIL_LINK_SELECTOR,
    DROPDOWN_BUTTON_SELECTOR, DROPDOWN_ITEM_CLASS, DROPDOWN_MENU_SELECTOR, DROPDOWN_SELECTOR,
    EXPANDED_CLASS, HIDDEN_CLASS, TABLE_ROW_SELECTOR,
};
use crate::dom;
use pointcloud_core::{Accordion, Facet, FacetFilter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct Table {
    rows: Rc<Vec<web::HtmlElement>>,
    filter: Rc<RefCell<FacetFilter>>,
}

impl Table {
    fn apply(&self) {
        let filter = self.filter.borrow();
        let mut shown = 0usize;
        for row in self.rows.iter() {
            let data = row.dataset();
            let show = filter.matches(
                data.get("stage").as_deref(),
                data.get("category").as_deref(),
            );
            let _ = row.class_list().toggle_with_force(HIDDEN_CLASS, !show);
            shown += show as usize;
        }
        log::debug!("[filter] {shown}/{} rows visible", self.rows.len());
    }
}

fn wire_dropdowns(document: &web::Document) {
    let dropdowns = Rc::new(dom::query_all(document, DROPDOWN_SELECTOR));
    if dropdowns.is_empty() {
        return;
    }
    for (i, dropdown) in dropdowns.iter().enumerate() {
        let Ok(Some(btn)) = dropdown.query_selector(DROPDOWN_BUTTON_SELECTOR) else {
            continue;
        };
        let all = dropdowns.clone();
        dom::add_listener(&btn, "click", move |ev| {
            ev.stop_propagation();
            for (j, d) in all.iter().enumerate() {
                if j != i {
                    let _ = d.class_list().remove_1(ACTIVE_CLASS);
                }
            }
            let _ = all[i].class_list().toggle(ACTIVE_CLASS);
        });
    }

    // Clicks anywhere outside a dropdown close them all.
    dom::add_listener(document, "click", move |ev| {
        let inside = dom::event_element(&ev)
            .map(|el| dom::has_ancestor(&el, DROPDOWN_SELECTOR))
            .unwrap_or(false);
        if !inside {
            for d in dropdowns.iter() {
                let _ = d.class_list().remove_1(ACTIVE_CLASS);
            }
        }
    });
}

fn wire_menus(document: &web::Document, table: &Table) {
    for menu in dom::query_all(document, DROPDOWN_MENU_SELECTOR) {
        let table = table.clone();
        let menu_el = menu.clone();
        dom::add_listener(&menu, "click", move |ev| {
            let Some(item) = dom::event_element(&ev) else {
                return;
            };
            if !item.class_list().contains(DROPDOWN_ITEM_CLASS) {
                return;
            }
            ev.stop_propagation();
            let kind = item.get_attribute("data-filter").unwrap_or_default();
            let facet = match kind.parse::<Facet>() {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("[filter] {e}");
                    return;
                }
            };
            let Some(value) = item.get_attribute("data-value") else {
                return;
            };
            for other in dom::query_all_in(&menu_el, &format!(".{DROPDOWN_ITEM_CLASS}")) {
                let _ = other.class_list().remove_1(ACTIVE_CLASS);
            }
            let _ = item.class_list().add_1(ACTIVE_CLASS);
            log::info!("[filter] {:?} = {}", facet, value);
            table.filter.borrow_mut().select(facet, value);
            table.apply();
        });
    }
}

fn wire_all_button(document: &web::Document, table: &Table) {
    let Some(all) = dom::query(document, ALL_FILTER_SELECTOR) else {
        return;
    };
    let table = table.clone();
    let doc = document.clone();
    dom::add_click_listener(&all, move |_ev| {
        for item in dom::query_all(&doc, &format!(".{DROPDOWN_ITEM_CLASS}")) {
            let _ = item.class_list().remove_1(ACTIVE_CLASS);
        }
        table.filter.borrow_mut().clear();
        table.apply();
    });
}

/// One expanded row at a time; clicks on detail links pass through.
fn wire_expandable_rows(table: &Table) {
    let accordion = Rc::new(RefCell::new(Accordion::default()));
    for (i, row) in table.rows.iter().enumerate() {
        if !matches!(row.query_selector(COMPANY_CELL_SELECTOR), Ok(Some(_))) {
            continue;
        }
        let rows = table.rows.clone();
        let accordion = accordion.clone();
        dom::add_click_listener(row, move |ev| {
            if dom::event_element(&ev)
                .map(|el| dom::has_ancestor(&el, DETAIL_LINK_SELECTOR))
                .unwrap_or(false)
            {
                return;
            }
            let mut acc = accordion.borrow_mut();
            if let Some(prev) = acc.toggle(i) {
                let _ = rows[prev].class_list().remove_1(EXPANDED_CLASS);
            }
            let open = acc.expanded() == Some(i);
            let _ = rows[i].class_list().toggle_with_force(EXPANDED_CLASS, open);
        });
    }
}

pub fn wire(document: &web::Document) {
    wire_dropdowns(document);
    let rows = dom::query_all(document, TABLE_ROW_SELECTOR);
    if rows.is_empty() {
        return;
    }
    let table = Table {
        rows: Rc::new(rows),
        filter: Rc::new(RefCell::new(FacetFilter::default())),
    };
    wire_menus(document, &table);
    wire_all_button(document, &table);
    wire_expandable_rows(&table);
}
