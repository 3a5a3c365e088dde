//! Static pieces of the generated document.

/// Base stylesheet: body reset, section fade-in, float classes, circular
/// wrapping and the pending look of images that have not loaded yet.
pub(super) const BASE_STYLES: &str = "body{margin:0;background:transparent;user-select:text;}\
.section{overflow:auto;animation:fade .3s ease;}\
@keyframes fade{from{opacity:0;transform:translateY(5px)}to{opacity:1;transform:translateY(0)}}\
.left{float:left;}\
.right{float:right;}\
.circle{shape-outside:circle();}\
.lazy{filter:blur(8px);opacity:.7;}";

/// Head script. `{post}` is replaced with the bridge call that delivers a
/// serialized payload `p` to the host.
///
/// Height is measured on load, on every resize, and once more after a
/// short delay for layout that settles late (web fonts, image decode).
pub(super) const HEAD_SCRIPT: &str = r#"function send(type,extra){
 var p=JSON.stringify(Object.assign({type:type},extra||{}));
 {post}
}
var lazyImages=new IntersectionObserver(function(entries){
 entries.forEach(function(e){
  if(e.isIntersecting){
   var img=e.target;
   img.src=img.dataset.src;
   img.classList.remove("lazy");
   lazyImages.unobserve(img);
  }
 });
});
function sendHeight(){
 send("HEIGHT",{height:document.body.scrollHeight});
}
window.addEventListener("load",sendHeight);
window.addEventListener("resize",sendHeight);
setTimeout(sendHeight,{delay});"#;

/// Body-end script; runs once every section is in the document.
pub(super) const OBSERVE_SCRIPT: &str =
    r#"document.querySelectorAll("img[data-src]").forEach(function(img){lazyImages.observe(img);});"#;

/// Click handler on each text block; the id travels in `data-id`.
pub(super) const CLICK_HANDLER: &str = "send('CLICK',{id:this.dataset.id})";

/// Delay of the one-shot height re-check, in milliseconds.
pub(super) const SETTLE_DELAY_MS: u32 = 500;
