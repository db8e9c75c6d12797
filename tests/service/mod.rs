mod ledger;
mod materializer;
mod recorder;
