// src/ui/tables.rs

use iced::widget::{column, container, horizontal_space, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::messages::Message;
use crate::models::{Collection, FieldKind, FieldSpec, Record};
use crate::table::RecordTable;
use crate::ui::styles::{CardStyle, INK, MUTED};
use crate::ui::{destructive_button, input_style, join_button, muted, primary_button, section_header};
use crate::utils::{meeting_link, total_amount};

const ACTIONS_WIDTH: f32 = 90.0;

fn title(collection: Collection) -> &'static str {
    match collection {
        Collection::Family => "Family",
        Collection::Meetings => "Meetings",
        Collection::Michango => "Michango",
    }
}

fn column_width(kind: FieldKind) -> Length {
    match kind {
        FieldKind::LongText => Length::FillPortion(3),
        FieldKind::Url => Length::FillPortion(2),
        _ => Length::FillPortion(1),
    }
}

pub fn view<'a>(table: &'a RecordTable, user_id: &'a str) -> Element<'a, Message> {
    let collection = table.collection();
    let schema = table.schema();

    let mut header_row = row(schema
        .iter()
        .map(|spec| {
            text(spec.label)
                .size(12)
                .width(column_width(spec.kind))
                .style(iced::theme::Text::Color(MUTED))
                .into()
        })
        .collect::<Vec<Element<Message>>>())
    .spacing(10);
    header_row = header_row.push(horizontal_space().width(ACTIONS_WIDTH));

    let body: Element<Message> = if table.rows().is_empty() {
        muted(format!("No {} yet.", title(collection).to_lowercase())).into()
    } else {
        column(
            table
                .rows()
                .iter()
                .map(|record| record_row(table, record, user_id))
                .collect::<Vec<Element<Message>>>(),
        )
        .spacing(8)
        .into()
    };

    let mut footer = row![primary_button("Add", Message::AddRow(collection))].align_items(Alignment::Center);
    if collection == Collection::Michango {
        let total = total_amount(table.rows().iter().map(|r| r.get("amount")));
        footer = footer
            .push(horizontal_space())
            .push(text(format!("Total: {:.2}", total)).size(16).style(iced::theme::Text::Color(INK)));
    }

    let card = container(column![header_row, scrollable(body).height(Length::Fill), footer].spacing(14))
        .padding(20)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(CardStyle)));

    column![section_header(title(collection)), card].spacing(20).into()
}

fn record_row<'a>(table: &'a RecordTable, record: &'a Record, user_id: &str) -> Element<'a, Message> {
    let editable = RecordTable::can_edit(record, user_id);

    let mut cells = row(table
        .schema()
        .iter()
        .map(|spec| cell(table, record, spec, editable))
        .collect::<Vec<Element<Message>>>())
    .spacing(10)
    .align_items(Alignment::Center);

    cells = if editable {
        cells.push(
            container(destructive_button("Remove", Message::RemoveRow(table.collection(), record.id)))
                .width(ACTIONS_WIDTH),
        )
    } else {
        cells.push(horizontal_space().width(ACTIONS_WIDTH))
    };

    cells.into()
}

fn cell<'a>(table: &'a RecordTable, record: &'a Record, spec: &'static FieldSpec, editable: bool) -> Element<'a, Message> {
    let value = table.value_of(record, spec.name);
    let width = column_width(spec.kind);

    if !editable {
        if spec.kind == FieldKind::Url {
            if let Some(link) = meeting_link(value) {
                return container(join_button(format!("Join {}", link.platform), &link.url))
                    .width(width)
                    .into();
            }
        }
        return text(value).size(14).width(width).into();
    }

    let collection = table.collection();
    let id = record.id;
    let field = spec.name;

    let input = text_input(spec.kind.placeholder(), value)
        .on_input(move |value| Message::EditField {
            collection,
            id,
            field,
            value,
        })
        .on_submit(Message::CommitField { collection, id, field })
        .padding(6)
        .size(14)
        .style(input_style());

    if spec.kind == FieldKind::Url {
        if let Some(link) = meeting_link(record.get(field)) {
            return row![input, join_button("Join".to_string(), &link.url)]
                .spacing(6)
                .width(width)
                .align_items(Alignment::Center)
                .into();
        }
    }

    container(input).width(width).into()
}
