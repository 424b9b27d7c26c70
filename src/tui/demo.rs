//! # Demo Menus
//!
//! The menus behind the `menukit` binary. Each one runs on any
//! [`Surface`], so the same code drives the real terminal and the
//! headless tests.
//!
//! ```text
//! Main (actions)
//! ├── i) Inventory   items: selectable / grayed / disabled / hidden
//! ├── r) Races       strings, every other entry filtered out
//! ├── a) Alphabet    columns, tags follow the screen
//! ├──                (blank separator, never landed on)
//! └── q) Quit        returned to the caller
//! ```

use std::cell::RefCell;

use log::{debug, info, warn};
use ratatui::style::{Color, Style};

use crate::core::config::ResolvedConfig;
use crate::core::error::MenuError;
use crate::core::event::{EventMask, MenuEvent};
use crate::core::layout::Columns;
use crate::core::menu::{LOWER_CASE, Menu, MenuFlags};
use crate::core::region::{Region, cell};
use crate::core::rows::{
    ActionRows, ItemFlags, ItemRows, MenuAction, MenuItem, RowKind, RowSource, StringRows,
};
use crate::core::surface::Surface;

pub const RACES: [&str; 10] = [
    "Human", "Half-Elf", "Elf", "Hobbit", "Gnome", "Dwarf", "Half-Orc", "Half-Troll", "Dunadan", "High-Elf",
];

pub const ALPHABET: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett", "Kilo", "Lima",
    "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango", "Uniform", "Victor", "Whiskey",
    "X-ray", "Yankee", "Zulu",
];

/// Position of "Quit" in the main menu.
const QUIT_ROW: usize = 4;

/// Run the demo for `kind` and return the event that closed it.
pub fn run_demo(surface: &mut dyn Surface, config: &ResolvedConfig, kind: RowKind) -> Result<MenuEvent, MenuError> {
    info!("Starting {} demo with the {} skin", kind, config.skin);
    match kind {
        RowKind::Actions => action_demo(surface, config),
        RowKind::Items => item_demo(surface, config),
        RowKind::Strings => string_demo(surface, config),
    }
}

/// Blank every line of the surface.
fn blank(surface: &mut dyn Surface) {
    let size = surface.size();
    for row in 0..size.height {
        surface.erase(row, 0, size.width);
    }
}

/// Lay `menu` out over `boundary` on a clean screen and run it.
fn open<R: RowSource>(menu: &mut Menu<'_, R>, boundary: Region, surface: &mut dyn Surface) -> Result<MenuEvent, MenuError> {
    blank(surface);
    menu.layout(boundary, surface.size());
    let event = menu.run(surface, EventMask::empty())?;
    blank(surface);
    Ok(event)
}

fn action_demo(surface: &mut dyn Surface, config: &ResolvedConfig) -> Result<MenuEvent, MenuError> {
    // Nested menus can't fail through a row callback; park the error here.
    let failure = RefCell::new(None);
    let report = |result: Result<MenuEvent, MenuError>| match result {
        Ok(event) => debug!("Submenu closed with {:?}", event),
        Err(e) => {
            warn!("Submenu failed: {}", e);
            *failure.borrow_mut() = Some(e);
        }
    };

    let mut rows = [
        MenuAction::new("Inventory")
            .tag('i')
            .on_select(|surface, _, _| report(item_demo(surface, config))),
        MenuAction::new("Races")
            .tag('r')
            .on_select(|surface, _, _| report(string_demo(surface, config))),
        MenuAction::new("Alphabet")
            .tag('a')
            .on_select(|surface, _, _| report(alphabet_demo(surface, config))),
        MenuAction::new(""),
        MenuAction::new("Quit").tag('q'),
    ];

    let mut menu = Menu::with_layout(config.layout(), ActionRows::new());
    menu.title = Some(config.title.as_str());
    menu.prompt = Some(config.prompt.as_str());
    menu.flags = config.flags();
    menu.set_data(&mut rows);

    // Submenu rows hand their selection back once the submenu closes;
    // reopen the main menu until Quit or Escape.
    loop {
        let event = open(&mut menu, Region::new(0, 0, 0, 0), surface);
        if let Some(e) = failure.borrow_mut().take() {
            return Err(e);
        }
        match event? {
            MenuEvent::Select { cursor } if cursor != QUIT_ROW => continue,
            event => return Ok(event),
        }
    }
}

fn item_state(item: &MenuItem<'_>) -> &'static str {
    if item.flags.contains(ItemFlags::DISABLED) {
        "cannot be used"
    } else if item.flags.contains(ItemFlags::GRAYED) {
        "unknown"
    } else if item.is_selected() {
        "marked"
    } else if item.flags.contains(ItemFlags::SELECTABLE) {
        "unmarked"
    } else {
        ""
    }
}

/// Browse hook for the inventory: describe the row under the cursor on
/// the line left free below the prompt.
fn item_status(oid: usize, rows: &[MenuItem<'_>], region: &Region, surface: &mut dyn Surface) {
    let line = cell(region.row + region.page_rows + 1);
    let width = surface.size().width;
    surface.erase(line, 0, width);
    if let Some(item) = rows.get(oid) {
        let text = format!("{}: {}", item.act.name, item_state(item));
        surface.put_str(line, cell(region.col), width, Style::default().fg(Color::Gray), &text);
    }
}

fn item_demo(surface: &mut dyn Surface, config: &ResolvedConfig) -> Result<MenuEvent, MenuError> {
    let mut items = [
        MenuItem::new(MenuAction::new("Potion of Cure Light Wounds"))
            .sel('a')
            .flags(ItemFlags::SELECTABLE),
        MenuItem::new(MenuAction::new("Flask of Oil"))
            .sel('b')
            .flags(ItemFlags::SELECTABLE),
        MenuItem::new(MenuAction::new("Scroll of Light"))
            .sel('c')
            .flags(ItemFlags::GRAYED),
        MenuItem::new(MenuAction::new("Wand of Stinking Cloud"))
            .sel('d')
            .flags(ItemFlags::DISABLED),
        MenuItem::new(MenuAction::new("Ring of Secrets"))
            .sel('e')
            .flags(ItemFlags::HIDDEN),
        MenuItem::new(MenuAction::new("Iron Shot"))
            .sel('f')
            .flags(ItemFlags::SELECTABLE),
    ];

    let mut menu = Menu::with_layout(config.layout(), ItemRows::new());
    menu.title = Some("Inventory");
    menu.prompt = Some(config.prompt.as_str());
    menu.flags = config.flags();
    menu.browse_hook = Some(Box::new(item_status));
    menu.set_data(&mut items);

    let event = open(&mut menu, Region::new(0, 0, 0, -1), surface);
    drop(menu);

    let marked: Vec<&str> = items
        .iter()
        .filter(|item| item.is_selected())
        .map(|item| item.act.name)
        .collect();
    info!("Inventory closed with {} marked: {:?}", marked.len(), marked);
    event
}

fn string_demo(surface: &mut dyn Surface, config: &ResolvedConfig) -> Result<MenuEvent, MenuError> {
    let mut rows = RACES;
    let filter: Vec<usize> = (0..RACES.len()).step_by(2).collect();

    let mut menu = Menu::with_layout(config.layout(), StringRows::new());
    menu.title = Some("Races");
    menu.prompt = Some(config.prompt.as_str());
    menu.selections = Some(LOWER_CASE);
    menu.flags = config.flags();
    menu.set_data(&mut rows);
    menu.set_filter(&filter);

    let event = open(&mut menu, Region::new(0, 0, 0, 0), surface)?;
    if let MenuEvent::Select { cursor } = event
        && let Some(oid) = menu.row_id(cursor)
    {
        info!("Picked race {}", RACES[oid]);
    }
    Ok(event)
}

fn alphabet_demo(surface: &mut dyn Surface, config: &ResolvedConfig) -> Result<MenuEvent, MenuError> {
    let mut rows = ALPHABET;

    let mut menu = Menu::with_layout(
        Box::new(Columns::with_max_width(config.column_width)),
        StringRows::new(),
    );
    menu.title = Some("Alphabet");
    menu.selections = Some(LOWER_CASE);
    menu.flags = MenuFlags::VIEW_TAGS | (config.flags() & (MenuFlags::CASELESS_TAGS | MenuFlags::DOUBLE_TAP));
    menu.set_data(&mut rows);

    let event = open(&mut menu, Region::new(0, 0, 0, 0), surface)?;
    if let MenuEvent::Select { cursor } = event {
        info!("Picked letter {}", ALPHABET[cursor]);
    }
    Ok(event)
}
