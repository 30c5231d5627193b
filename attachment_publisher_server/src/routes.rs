//! Request handler definitions
//!
//! Define each route and its handler here. The webhook handlers are longer, so they live in
//! [`webhook_routes`](crate::webhook_routes).
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Handlers here never wait on the renderer or the bank API; that
//! work happens on the match event handler.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use receipt_matching_engine::{MatchingApi, ReconciliationStore};

use crate::{data_objects::PendingSummary, errors::ServerError};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Pending  ----------------------------------------------------
route!(pending => Get "/pending" impl ReconciliationStore);
/// Lists every transaction and receipt that is still waiting for its counterpart, oldest first.
pub async fn pending<B: ReconciliationStore>(api: web::Data<MatchingApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ GET pending items");
    let transactions = api.pending_transactions().await?;
    let receipts = api.pending_receipts().await?;
    debug!("💻️ {} pending transactions, {} pending receipts", transactions.len(), receipts.len());
    Ok(HttpResponse::Ok().json(PendingSummary::new(transactions, receipts)))
}
