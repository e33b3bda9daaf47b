use dioxus::prelude::*;
use hotelfix::util::pagination::Paginator;

/// Page state following the length of a list.
///
/// When the list shrinks the current page is pulled back into range; the page size only
/// changes through [`Paginator::set_items_per_page`], which returns to page 1.
pub fn use_pagination(total_items: Memo<usize>, items_per_page: usize) -> Signal<Paginator> {
    let mut paginator = use_signal(|| Paginator::new(total_items(), items_per_page));

    use_effect(move || {
        let total = total_items();
        if paginator.peek().total_items() != total {
            paginator.write().set_total_items(total);
        }
    });

    paginator
}
