//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`。
//! 只有没拿到响应时才返回 `TransportError`，任何状态码都原样交回适配层分类。

use careerguide::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn transport(context: &str, err: JsValue) -> TransportError {
    TransportError(format!("{}: {:?}", context, err))
}

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    fn build(req: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new().map_err(|e| transport("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| transport("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| transport("请求构建失败", e))
    }

    async fn read_text(response: &Response) -> Result<String, TransportError> {
        let promise = response
            .text()
            .map_err(|e| transport("读取响应失败", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| transport("读取响应失败", e))?;

        text.as_string()
            .ok_or_else(|| TransportError("响应体无法转换为字符串".to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = Self::build(&req)?;

        let window =
            web_sys::window().ok_or_else(|| TransportError("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport("网络错误", e))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| transport("Response 类型转换失败", e))?;

        let body = Self::read_text(&response).await?;
        Ok(HttpResponse::new(response.status(), body))
    }
}
