use clap::Parser;
use datocms::integrations_page_query;

#[derive(Parser, Debug)]
#[command(about = "Print the GraphQL query used to fetch the page content")]
pub struct QueryCommand;

pub(crate) fn invoke() -> anyhow::Result<Option<String>> {
    Ok(Some(integrations_page_query().to_string()))
}
